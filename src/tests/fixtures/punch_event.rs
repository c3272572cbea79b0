// Shared test fixture for PunchEvent.
// Compiled into the crate only during tests, exposed under `crate::tests::fixtures`.

use crate::modules::attendance::use_cases::record_punch::command::PunchEvent;

pub struct PunchEventBuilder {
    inner: PunchEvent,
}

impl Default for PunchEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl PunchEventBuilder {
    pub fn new() -> Self {
        Self {
            inner: PunchEvent {
                employee_id: Some("1001".to_string()),
                employee_name: Some("Maria Souza".to_string()),
                tax_id: Some("12345678900".to_string()),
                date: Some("2024-03-15".to_string()),
                time: Some("08:00:00".to_string()),
            },
        }
    }

    pub fn employee_id(mut self, v: impl Into<String>) -> Self {
        self.inner.employee_id = Some(v.into());
        self
    }

    pub fn no_employee_id(mut self) -> Self {
        self.inner.employee_id = None;
        self
    }

    pub fn employee_name(mut self, v: impl Into<String>) -> Self {
        self.inner.employee_name = Some(v.into());
        self
    }

    pub fn no_employee_name(mut self) -> Self {
        self.inner.employee_name = None;
        self
    }

    pub fn tax_id(mut self, v: impl Into<String>) -> Self {
        self.inner.tax_id = Some(v.into());
        self
    }

    pub fn no_tax_id(mut self) -> Self {
        self.inner.tax_id = None;
        self
    }

    pub fn date(mut self, v: impl Into<String>) -> Self {
        self.inner.date = Some(v.into());
        self
    }

    pub fn no_date(mut self) -> Self {
        self.inner.date = None;
        self
    }

    pub fn time(mut self, v: impl Into<String>) -> Self {
        self.inner.time = Some(v.into());
        self
    }

    pub fn no_time(mut self) -> Self {
        self.inner.time = None;
        self
    }

    pub fn build(self) -> PunchEvent {
        self.inner
    }
}

#[cfg(test)]
mod punch_event_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new() {
        assert_eq!(
            PunchEventBuilder::default().build(),
            PunchEventBuilder::new().build()
        );
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = PunchEventBuilder::new()
            .employee_id("2002")
            .employee_name("João Lima")
            .tax_id("98765432100")
            .date("2024-04-01")
            .time("17:30:00")
            .build();

        assert_eq!(custom.employee_id.as_deref(), Some("2002"));
        assert_eq!(custom.employee_name.as_deref(), Some("João Lima"));
        assert_eq!(custom.tax_id.as_deref(), Some("98765432100"));
        assert_eq!(custom.date.as_deref(), Some("2024-04-01"));
        assert_eq!(custom.time.as_deref(), Some("17:30:00"));
    }

    #[rstest]
    fn clearers_remove_fields() {
        let empty = PunchEventBuilder::new()
            .no_employee_id()
            .no_employee_name()
            .no_tax_id()
            .no_date()
            .no_time()
            .build();
        assert_eq!(empty, PunchEvent::default());
    }
}
