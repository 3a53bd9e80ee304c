use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::metal::validation::validate_metal;
use crate::metal::Metal;

pub fn run(metals: &[Metal]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if metals.is_empty() {
        result.add_message(CmdMessage::warning("No metals to check."));
        return Ok(result);
    }

    for (i, metal) in metals.iter().enumerate() {
        let label = if metal.name.trim().is_empty() {
            format!("metal #{}", i + 1)
        } else {
            metal.name.clone()
        };

        match validate_metal(metal) {
            Ok(()) => result.add_message(CmdMessage::success(format!("{}: ok", label))),
            Err(errors) => {
                for error in errors {
                    result.add_message(CmdMessage::error(format!("{}: {}", label, error)));
                }
            }
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metal::PurityLevel;

    #[test]
    fn test_all_valid() {
        let metals = vec![Metal::new("Gold", "#FFD700").with_level(PurityLevel::new(14.0, 1.1))];
        let res = run(&metals).unwrap();
        assert!(!res.has_errors());
        assert_eq!(res.messages[0].content, "Gold: ok");
    }

    #[test]
    fn test_reports_each_problem() {
        let metals = vec![
            Metal::new("Gold", "#FFD700").with_level(PurityLevel::new(14.0, 1.1)),
            Metal::new("", "#FFD700"),
        ];
        let res = run(&metals).unwrap();
        assert!(res.has_errors());
        let contents: Vec<&str> = res.messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(
            contents,
            vec![
                "Gold: ok",
                "metal #2: metal name is required",
                "metal #2: at least one purity level is required",
            ]
        );
    }

    #[test]
    fn test_nothing_to_check() {
        let res = run(&[]).unwrap();
        assert!(!res.has_errors());
        assert_eq!(res.messages.len(), 1);
    }
}
