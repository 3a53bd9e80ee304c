use crate::commands::{check_base_price, CmdMessage, CmdResult};
use crate::error::Result;
use crate::metal::{find_metal, Karat, Metal, PurityPrice};

pub fn run(
    metals: &[Metal],
    name: Option<&str>,
    karat: Karat,
    base_price: f64,
) -> Result<CmdResult> {
    check_base_price(base_price)?;
    let metal = find_metal(metals, name)?;

    let multiplier = metal.cumulative_multiplier(karat);
    let level = metal.level_index(karat).map(|i| &metal.purity_levels[i]);
    let row = PurityPrice {
        karat,
        multiplier,
        price: base_price * multiplier,
        active: level.is_some_and(|l| l.active),
    };

    let mut result = CmdResult::default()
        .with_metal(metal.name.clone())
        .with_prices(vec![row]);

    match level {
        None => result.add_message(CmdMessage::warning(format!(
            "{} does not offer {}; base price applies",
            metal.name, karat
        ))),
        Some(l) if !l.active => result.add_message(CmdMessage::warning(format!(
            "{} {} is inactive",
            metal.name, karat
        ))),
        Some(_) => {}
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::metal::PurityLevel;

    fn metals() -> Vec<Metal> {
        vec![
            Metal::new("Yellow Gold", "#FFD700")
                .with_level(PurityLevel::new(10.0, 1.0))
                .with_level(PurityLevel::new(14.0, 1.15))
                .with_level(PurityLevel::new(18.0, 1.2).inactive()),
            Metal::new("Platinum", "#E5E4E2").with_level(PurityLevel::new(950.0, 1.4)),
        ]
    }

    fn k(v: f64) -> Karat {
        Karat::new(v).unwrap()
    }

    #[test]
    fn test_price_for_offered_karat() {
        let res = run(&metals(), Some("yellow gold"), k(14.0), 500.0).unwrap();
        assert_eq!(res.metal.as_deref(), Some("Yellow Gold"));
        assert_eq!(res.prices.len(), 1);
        assert!((res.prices[0].price - 575.0).abs() < 1e-9);
        assert!(res.prices[0].active);
        assert!(res.messages.is_empty());
    }

    #[test]
    fn test_missing_karat_warns() {
        let res = run(&metals(), Some("Platinum"), k(900.0), 500.0).unwrap();
        assert_eq!(res.prices[0].multiplier, 1.0);
        assert_eq!(res.prices[0].price, 500.0);
        assert!(!res.prices[0].active);
        assert_eq!(res.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn test_inactive_level_warns() {
        let res = run(&metals(), Some("Yellow Gold"), k(18.0), 100.0).unwrap();
        assert!((res.prices[0].price - 138.0).abs() < 1e-9);
        assert_eq!(res.messages[0].content, "Yellow Gold 18K is inactive");
    }

    #[test]
    fn test_errors() {
        assert!(run(&metals(), None, k(14.0), 100.0).is_err());
        assert!(run(&metals(), Some("Silver"), k(14.0), 100.0).is_err());
        assert!(run(&metals(), Some("Platinum"), k(950.0), -5.0).is_err());
    }
}
