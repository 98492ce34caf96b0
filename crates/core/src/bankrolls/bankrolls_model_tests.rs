//! Tests for bankroll domain models.

#[cfg(test)]
mod tests {
    use crate::bankrolls::{BankrollUpdate, NewBankroll};
    use crate::errors::{Error, ValidationError};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_bankroll_starts_at_initial_balance() {
        let now = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let bankroll = NewBankroll {
            name: "  Main  ".into(),
            initial_balance: dec!(1000),
        }
        .into_bankroll("b-1".into(), "alice", now);

        assert_eq!(bankroll.name, "Main");
        assert_eq!(bankroll.current_balance, dec!(1000));
        assert_eq!(bankroll.net_profit(), dec!(0));
    }

    #[test]
    fn test_zero_initial_balance_is_allowed() {
        let bankroll = NewBankroll {
            name: "Fresh".into(),
            initial_balance: dec!(0),
        };
        assert!(bankroll.validate().is_ok());
    }

    #[test]
    fn test_negative_initial_balance_is_rejected() {
        let bankroll = NewBankroll {
            name: "Overdrawn".into(),
            initial_balance: dec!(-0.01),
        };
        match bankroll.validate() {
            Err(Error::Validation(ValidationError::ConstraintViolated { field, .. })) => {
                assert_eq!(field, "initialBalance")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let bankroll = NewBankroll {
            name: "   ".into(),
            initial_balance: dec!(10),
        };
        assert!(bankroll.validate().is_err());

        let rename = BankrollUpdate {
            id: "b-1".into(),
            name: String::new(),
        };
        assert!(rename.validate().is_err());
    }

    #[test]
    fn test_balances_serialize_as_strings() {
        let json = serde_json::to_value(NewBankroll {
            name: "Main".into(),
            initial_balance: dec!(1000.50),
        })
        .unwrap();
        assert_eq!(json["initialBalance"], "1000.50");
    }
}
