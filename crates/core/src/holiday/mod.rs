mod error;
mod month;
mod operations;
mod requests;
mod types;

pub use error::{EnvelopeError, HolidayError};
pub use month::{
    get_calendar_week, group_events_by_date, month_bounds, month_view, next_month,
    previous_month, DayCell, MonthView,
};
pub use operations::{materialize, materialize_record};
pub use requests::{
    encode_params, ApiEnvelope, ApiErrorInfo, HolidayQuery, SubdivisionQuery, COUNTRIES_ENDPOINT,
    HOLIDAYS_ENDPOINT, SUBDIVISIONS_ENDPOINT, VALID_FROM, VALID_TO,
};
pub use types::{CalendarEvent, Country, HolidayRecord, HolidayType, Subdivision};
