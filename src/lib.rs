pub mod configuration;

pub mod estimate;

pub mod breakdown {
    pub mod daycategory;
    pub mod vacationdays;
    pub mod yearbreakdown;
    pub mod dayclassifier;
    pub mod remotedays;
}

pub mod form {
    pub mod formdata;
    pub mod formcontext;
}

pub mod input {
    pub mod inputerror;
    pub mod inputparser;
}

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod relief {
    pub mod householdcosts;
    pub mod reliefparameters;
    pub mod reliefcalculator;
}

pub mod time {
    pub mod utility;
    pub mod rangeofdates;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod weekendadjustment;
        pub mod fixeddateholiday;
        pub mod nthweekdayholiday;
        pub mod lastweekdayholiday;
        pub mod easterrelatedholiday;
        pub mod namedholiday;
    }

    pub mod calendar {
        pub mod publicholiday;
        pub mod holidaycalendar;
        pub mod simplecalendar;
        pub mod ireland;
        pub mod holidaycalendarmanager;
    }
}

pub use breakdown::dayclassifier::get_year_breakdown;
pub use time::calendar::ireland::get_public_holidays;
pub use time::utility::get_total_days_in_year;
