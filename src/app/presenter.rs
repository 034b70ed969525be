use crate::configuration::constants::layout::{
    COLUMN_WIDTH, DATE_FORMAT, MISSING, NAME_DISPLAY_CHARS, RULE_WIDTH, STATUS_WIDTH,
};
use crate::model::{TestCase, TestSuite};
use http::StatusCode;
use std::io::{Result, Write};

/// Renders suites and their cases as plain text tables.
pub struct Presenter<W> {
    out: W,
}

impl<W> Presenter<W>
where
    W: Write,
{
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn no_results(&mut self) -> Result<()> {
        writeln!(self.out, "No results found")
    }

    pub fn suite_error(&mut self, status: StatusCode) -> Result<()> {
        writeln!(self.out, "Error: {}", status.as_u16())
    }

    pub fn suite(&mut self, suite: &TestSuite) -> Result<()> {
        writeln!(
            self.out,
            "Test results for test suite: {}\n",
            or_missing(&suite.name)
        )?;
        writeln!(self.out, "    ID       : {}", suite.id)?;
        writeln!(self.out, "    Lab name : {}", or_missing(&suite.lab_name))?;
        writeln!(self.out, "    Board    : {}", or_missing(&suite.board))?;
        writeln!(self.out, "    Arch     : {}", or_missing(&suite.arch))?;
        writeln!(self.out, "    Tree     : {}", or_missing(&suite.job))?;
        writeln!(self.out, "    Kernel   : {}", or_missing(&suite.kernel))?;
        writeln!(self.out, "    Defconfig: {}", or_missing(&suite.defconfig_full))?;
        writeln!(self.out)
    }

    pub fn cases(&mut self, cases: &[TestCase]) -> Result<()> {
        writeln!(
            self.out,
            "{:^col$} {:^col$} {:^col$} {:^status$}",
            "ID",
            "Date",
            "Name",
            "Status",
            col = COLUMN_WIDTH,
            status = STATUS_WIDTH
        )?;
        writeln!(self.out, "{}", "-".repeat(RULE_WIDTH))?;
        for case in cases {
            self.case(case)?;
        }
        Ok(())
    }

    pub fn cases_error(&mut self) -> Result<()> {
        writeln!(self.out, "Error getting test cases")
    }

    pub fn suite_footer(&mut self) -> Result<()> {
        writeln!(self.out, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(self.out, "\n")
    }

    fn case(&mut self, case: &TestCase) -> Result<()> {
        let name: String = case.name.chars().take(NAME_DISPLAY_CHARS).collect();
        writeln!(
            self.out,
            "{:<col$} {:^col$} {:<col$} {:^status$}",
            case.id,
            case.created_on.format(DATE_FORMAT).to_string(),
            name,
            or_missing(&case.status),
            col = COLUMN_WIDTH,
            status = STATUS_WIDTH
        )
    }
}

fn or_missing(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(MISSING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::deserialize::epoch_date;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Presenter<Vec<u8>>) -> Result<()>,
    {
        let mut presenter = Presenter::new(Vec::new());
        f(&mut presenter).unwrap();
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    fn case(name: &str, millis: i64) -> TestCase {
        TestCase {
            id: "58a3f1d559b5141c2e7e3f12".to_owned(),
            created_on: epoch_date::from_millis(millis).unwrap(),
            name: name.to_owned(),
            status: Some("PASS".to_owned()),
        }
    }

    #[test]
    fn test_header_and_rule() {
        let output = render(|p| p.cases(&[]));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(
            lines[0],
            "           ID                      Date                     Name           Status"
        );
        assert_eq!(lines[1], "-".repeat(80));
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_epoch_zero_renders_as_iso_datetime() {
        let output = render(|p| p.cases(&[case("login", 0)]));
        let row = output.lines().nth(2).unwrap();

        assert_eq!(
            row,
            "58a3f1d559b5141c2e7e3f12   1970-01-01T00:00:00    login                     PASS "
        );
    }

    #[test]
    fn test_long_name_is_truncated() {
        let long_name = "abcdefghijklmnopqrstuvwxyz0123";
        assert_eq!(long_name.chars().count(), 30);

        let output = render(|p| p.cases(&[case(long_name, 0)]));
        let row = output.lines().nth(2).unwrap();

        assert!(row.contains("abcdefghijklmnopqrstuv "));
        assert!(!row.contains("abcdefghijklmnopqrstuvw"));
    }

    #[test]
    fn test_suite_block() {
        let suite = TestSuite {
            id: "58a3f1d559b5141c2e7e3f11".to_owned(),
            name: Some("boot".to_owned()),
            lab_name: Some("lab-baylibre".to_owned()),
            board: Some("beaglebone-black".to_owned()),
            arch: Some("arm".to_owned()),
            job: Some("mainline".to_owned()),
            kernel: Some("v4.10-rc8".to_owned()),
            defconfig_full: None,
            created_on: None,
        };
        let output = render(|p| p.suite(&suite));

        assert_eq!(
            output,
            "Test results for test suite: boot\n\
             \n    ID       : 58a3f1d559b5141c2e7e3f11\
             \n    Lab name : lab-baylibre\
             \n    Board    : beaglebone-black\
             \n    Arch     : arm\
             \n    Tree     : mainline\
             \n    Kernel   : v4.10-rc8\
             \n    Defconfig: n/a\
             \n\n"
        );
    }

    #[test]
    fn test_footer() {
        let output = render(|p| p.suite_footer());

        assert_eq!(output, format!("{}\n\n\n", "=".repeat(80)));
    }

    #[test]
    fn test_error_lines() {
        assert_eq!(
            render(|p| p.suite_error(StatusCode::INTERNAL_SERVER_ERROR)),
            "Error: 500\n"
        );
        assert_eq!(render(|p| p.cases_error()), "Error getting test cases\n");
        assert_eq!(render(|p| p.no_results()), "No results found\n");
    }
}
