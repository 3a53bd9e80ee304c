use crate::commands::{CmdMessage, CmdResult};
use crate::description::Description;
use crate::error::Result;
use crate::richtext::RenderOptions;

pub fn run(source: &str, options: RenderOptions) -> Result<CmdResult> {
    let description = Description::from_text(source);
    let mut result = CmdResult::default().with_html(description.to_html(options));

    match &description {
        Description::Malformed(err) => {
            result.add_message(CmdMessage::warning(format!("Using fallback text: {}", err)))
        }
        Description::Empty => result.add_message(CmdMessage::warning("Description is empty")),
        _ => {}
    }
    Ok(result)
}
