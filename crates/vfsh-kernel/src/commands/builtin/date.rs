//! date: Show the local date and time.

use chrono::Local;

use super::reject_args;
use crate::commands::ExecContext;
use crate::interpreter::ExecResult;

const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn run(args: &[String], _ctx: &mut ExecContext) -> ExecResult {
    if let Some(err) = reject_args("date", args) {
        return err;
    }
    ExecResult::success(Local::now().format(FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::builtin::fixture::Fixture;
    use chrono::NaiveDateTime;

    #[test]
    fn test_date_format() {
        let mut fx = Fixture::new();
        let result = fx.run(run, &[]);
        assert!(result.ok());
        assert!(
            NaiveDateTime::parse_from_str(&result.out, FORMAT).is_ok(),
            "unexpected output: {}",
            result.out
        );
    }

    #[test]
    fn test_date_rejects_args() {
        let mut fx = Fixture::new();
        assert!(!fx.run(run, &["+%s"]).ok());
    }
}
