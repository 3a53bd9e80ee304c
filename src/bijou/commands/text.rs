use crate::commands::{CmdMessage, CmdResult};
use crate::description::Description;
use crate::error::Result;

/// Plain text of a description; with `width`, the truncated preview instead.
pub fn run(source: &str, width: Option<usize>) -> Result<CmdResult> {
    let description = Description::from_text(source);
    let text = match width {
        Some(w) => description.preview(w),
        None => description.plain_text(),
    };

    let mut result = CmdResult::default().with_text(text);
    if let Description::Malformed(err) = &description {
        result.add_message(CmdMessage::warning(format!("Using fallback text: {}", err)));
    }
    Ok(result)
}
