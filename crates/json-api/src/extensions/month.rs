//! `year`/`month` query parsing for the daily report endpoints.

use salvo::{oapi::extract::QueryParam, prelude::StatusError};
use till_app::domain::periods::Month;

use crate::extensions::*;

pub(crate) trait MonthQueryExt {
    fn into_month(self) -> Result<Month, StatusError>;
}

impl MonthQueryExt for (QueryParam<i16, true>, QueryParam<i8, true>) {
    fn into_month(self) -> Result<Month, StatusError> {
        let (year, month) = self;

        Month::new(year.into_inner(), month.into_inner())
            .or_400("year and month must name a calendar month")
    }
}
