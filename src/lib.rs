pub mod time {
    pub mod utility;
    pub mod timeerror;
    pub mod calendardate;
    pub mod quotedate;
    pub mod holidayadjustment;

    pub mod calendar {
        pub mod holidaycalendar;
        pub mod simplecalendar;
        pub mod jointcalendar;
    }

    pub mod daycounter {
        pub mod anydaycounter;
    }
}
