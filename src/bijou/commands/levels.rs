use crate::commands::{check_base_price, CmdMessage, CmdResult};
use crate::error::Result;
use crate::metal::{find_metal, Metal};

pub fn run(
    metals: &[Metal],
    name: Option<&str>,
    base_price: f64,
    active_only: bool,
) -> Result<CmdResult> {
    check_base_price(base_price)?;
    let metal = find_metal(metals, name)?;

    let prices = if active_only {
        metal.price_table_active(base_price)
    } else {
        metal.price_table(base_price)
    };

    let mut result = CmdResult::default().with_metal(metal.name.clone());
    if prices.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "{} has no purity levels to price",
            metal.name
        )));
    }
    if !metal.active {
        result.add_message(CmdMessage::warning(format!("{} is inactive", metal.name)));
    }
    Ok(result.with_prices(prices))
}
