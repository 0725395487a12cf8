#[cfg(test)]
mod coordinate_tests {
    use crate::error::CoordinateError;
    use crate::geo::Coordinate;

    /// Test that coordinate validation works correctly at the API boundary.
    #[test]
    fn test_coordinate_validation() {
        assert!(Coordinate::new("New York", 40.7128, -74.0060).is_ok());
        assert!(Coordinate::new("corner", 90.0, 180.0).is_ok());
        assert!(Coordinate::new("corner", -90.0, -180.0).is_ok());

        assert_eq!(
            Coordinate::new("nowhere", 91.0, 0.0),
            Err(CoordinateError::InvalidLatitude { value: 91.0 })
        );
        assert!(Coordinate::new("nowhere", -91.0, 0.0).is_err());
        assert_eq!(
            Coordinate::new("nowhere", 0.0, 181.0),
            Err(CoordinateError::InvalidLongitude { value: 181.0 })
        );
        assert!(Coordinate::new("nowhere", 0.0, -360.0).is_err());
        assert!(Coordinate::new("nowhere", f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_coordinate_display() {
        let home = Coordinate::new("Ivybridge", 50.392189, -3.941355).unwrap();
        assert_eq!(home.to_string(), "Ivybridge (50.3922°, -3.9414°)");
    }
}

#[cfg(test)]
mod solar_tests {
    use crate::geo::{Anchor, Coordinate, SolarDay, solar_elevation, sun_times};
    use crate::logger::NullSink;
    use crate::physics::Kernel;
    use chrono::{Duration, NaiveDate, TimeZone, Utc};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn minutes_apart(a: chrono::DateTime<Utc>, b: chrono::DateTime<Utc>) -> i64 {
        (a - b).num_minutes().abs()
    }

    /// Equator on an equinox: roughly twelve hours of daylight.
    #[test]
    fn test_equator_equinox_day_length() {
        let equator = Coordinate::new("equator", 0.0, 0.0).unwrap();
        let day = sun_times(&equator, date(2024, 3, 20));

        assert!(matches!(day, SolarDay::Regular { .. }));
        let minutes = day.day_length().num_minutes();
        // Refraction and the solar disc add a few minutes either side
        assert!((minutes - 12 * 60).abs() <= 15, "got {minutes} minutes");

        let sunrise = day.sunrise().unwrap();
        let sunset = day.sunset().unwrap();
        assert!(sunrise < day.solar_noon() && day.solar_noon() < sunset);
        // Solar noon at Greenwich is within the equation of time of 12:00 UTC
        let noon = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
        assert!(minutes_apart(day.solar_noon(), noon) <= 17);
    }

    /// Above the Arctic circle in June the sun does not set.
    #[test]
    fn test_arctic_summer_is_polar_day() {
        let longyearbyen = Coordinate::new("Longyearbyen", 78.2232, 15.6267).unwrap();
        let day = sun_times(&longyearbyen, date(2024, 6, 21));

        assert!(matches!(day, SolarDay::PolarDay { .. }));
        assert_eq!(day.sunrise(), None);
        assert_eq!(day.sunset(), None);
        assert_eq!(day.day_length(), Duration::days(1));
    }

    #[test]
    fn test_arctic_winter_is_polar_night() {
        let longyearbyen = Coordinate::new("Longyearbyen", 78.2232, 15.6267).unwrap();
        let day = sun_times(&longyearbyen, date(2024, 12, 21));

        assert!(matches!(day, SolarDay::PolarNight { .. }));
        assert_eq!(day.event(Anchor::Sunrise), None);
        assert_eq!(day.day_length(), Duration::zero());
    }

    #[test]
    fn test_southern_hemisphere_is_reversed() {
        let mcmurdo = Coordinate::new("McMurdo", -77.8419, 166.6863).unwrap();
        assert!(matches!(
            sun_times(&mcmurdo, date(2024, 12, 21)),
            SolarDay::PolarDay { .. }
        ));
        assert!(matches!(
            sun_times(&mcmurdo, date(2024, 6, 21)),
            SolarDay::PolarNight { .. }
        ));
    }

    /// The poles themselves must not produce NaN times.
    #[test]
    fn test_exact_poles() {
        let north = Coordinate::new("North Pole", 90.0, 0.0).unwrap();
        assert!(matches!(
            sun_times(&north, date(2024, 6, 21)),
            SolarDay::PolarDay { .. }
        ));
        assert!(matches!(
            sun_times(&north, date(2024, 12, 21)),
            SolarDay::PolarNight { .. }
        ));
    }

    /// Compare against the `sunrise` crate for a spread of cities.
    #[test]
    fn test_agrees_with_reference_implementation() {
        let cities = [
            ("New York", 40.7128, -74.0060),
            ("London", 51.5074, -0.1278),
            ("Tokyo", 35.6762, 139.6503),
            ("Sydney", -33.8688, 151.2093),
            ("Singapore", 1.3521, 103.8198),
            ("Ivybridge", 50.392189, -3.941355),
        ];
        let dates = [date(2024, 1, 15), date(2024, 6, 21), date(2024, 10, 3)];

        for (name, lat, lon) in cities {
            let coordinate = Coordinate::new(name, lat, lon).unwrap();
            let reference_coord = sunrise::Coordinates::new(lat, lon).unwrap();

            for day in dates {
                let ours = sun_times(&coordinate, day);
                let reference = sunrise::SolarDay::new(reference_coord, day);

                let sunrise_diff = minutes_apart(
                    ours.sunrise().unwrap(),
                    reference.event_time(sunrise::SolarEvent::Sunrise),
                );
                let sunset_diff = minutes_apart(
                    ours.sunset().unwrap(),
                    reference.event_time(sunrise::SolarEvent::Sunset),
                );

                assert!(
                    sunrise_diff <= 5,
                    "{name} {day}: sunrise differs by {sunrise_diff} minutes"
                );
                assert!(
                    sunset_diff <= 5,
                    "{name} {day}: sunset differs by {sunset_diff} minutes"
                );
            }
        }
    }

    /// Far east longitudes put the local sunrise on the previous UTC day.
    #[test]
    fn test_sunrise_before_utc_midnight() {
        let sydney = Coordinate::new("Sydney", -33.8688, 151.2093).unwrap();
        let day = sun_times(&sydney, date(2024, 6, 21));
        let sunrise = day.sunrise().unwrap();

        assert_eq!(sunrise.date_naive(), date(2024, 6, 20));
        assert!(day.sunset().unwrap() > sunrise);
    }

    #[test]
    fn test_solar_elevation_noon_and_midnight() {
        let kernel = Kernel::new(&NullSink);
        let equator = Coordinate::new("equator", 0.0, 0.0).unwrap();
        let day = sun_times(&equator, date(2024, 3, 20));

        let at_noon = solar_elevation(&equator, day.solar_noon(), &kernel);
        assert!(at_noon > 88.0, "got {at_noon}°");

        let at_midnight = solar_elevation(&equator, day.solar_noon() + Duration::hours(12), &kernel);
        assert!(at_midnight < -88.0, "got {at_midnight}°");

        // Sunrise is defined at a zenith of 90.833°
        let at_sunrise = solar_elevation(&equator, day.sunrise().unwrap(), &kernel);
        assert!((at_sunrise + 0.833).abs() < 0.3, "got {at_sunrise}°");
    }
}

#[cfg(test)]
mod locale_tests {
    use crate::geo::{Coordinate, Locale, SolarDay, current_time_descriptor, sun_times};
    use chrono::{NaiveDate, TimeZone, Utc};
    use chrono_tz::{Australia, Europe, Pacific, Tz};

    /// Sunrise and sunset of `locale.solar_day()` on the locale's own calendar.
    fn local_event_dates(locale: &Locale) -> (NaiveDate, NaiveDate) {
        let day = locale.solar_day();
        let local = |instant: chrono::DateTime<Utc>| locale.local(instant).date_naive();
        (
            local(day.sunrise().unwrap()),
            local(day.sunset().unwrap()),
        )
    }

    fn assert_events_fall_today(name: &str, lat: f64, lon: f64, tz: Tz) {
        let place = Coordinate::new(name, lat, lon).unwrap();
        // Late evening UTC is already the next day west of the date line
        for hour in [0, 11, 23] {
            let now = Utc.with_ymd_and_hms(2024, 3, 20, hour, 0, 0).unwrap();
            let locale = Locale::at(place.clone(), tz, now);
            let today = locale.today();

            assert_eq!(
                local_event_dates(&locale),
                (today, today),
                "{name} at {now}"
            );
        }
    }

    #[test]
    fn test_current_time_descriptor() {
        let home = Coordinate::new("Ivybridge", 50.392189, -3.941355).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
        let locale = Locale::at(home, Europe::London, now);

        assert_eq!(
            current_time_descriptor(&locale),
            "13:00:00 BST (Europe/London) in Ivybridge"
        );
    }

    #[test]
    fn test_today_uses_locale_timezone() {
        let sydney = Coordinate::new("Sydney", -33.8688, 151.2093).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 6, 21, 20, 0, 0).unwrap();
        let locale = Locale::at(sydney, Australia::Sydney, now);

        assert_eq!(locale.today(), NaiveDate::from_ymd_opt(2024, 6, 22).unwrap());
    }

    #[test]
    fn test_solar_day_on_local_calendar_far_from_longitude() {
        // UTC+14 at 157°W
        assert_events_fall_today("Kiritimati", 1.87, -157.4, Pacific::Kiritimati);
        // UTC+13 at 172°W
        assert_events_fall_today("Apia", -13.8333, -171.7667, Pacific::Apia);
        assert_events_fall_today("Sydney", -33.8688, 151.2093, Australia::Sydney);
        assert_events_fall_today("Ivybridge", 50.392189, -3.941355, Europe::London);
    }

    #[test]
    fn test_solar_day_matches_mean_solar_day_near_meridian() {
        let home = Coordinate::new("Ivybridge", 50.392189, -3.941355).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 3, 20, 10, 0, 0).unwrap();
        let locale = Locale::at(home.clone(), Europe::London, now);

        let (SolarDay::Regular { sunrise: a, .. }, SolarDay::Regular { sunrise: b, .. }) =
            (locale.solar_day(), sun_times(&home, locale.today()))
        else {
            panic!("expected a regular day in Ivybridge");
        };
        assert!((a - b).num_seconds().abs() < 60);
    }
}

#[cfg(test)]
mod timezone_tests {
    use crate::geo::determine_timezone_from_coordinates;
    use chrono_tz::{America, Asia, Europe};

    /// Test that timezone detection works for real-world coordinates.
    #[test]
    fn test_timezone_detection() {
        assert_eq!(
            determine_timezone_from_coordinates(40.7128, -74.0060),
            America::New_York
        );
        assert_eq!(
            determine_timezone_from_coordinates(51.5074, -0.1278),
            Europe::London
        );
        assert_eq!(
            determine_timezone_from_coordinates(35.6762, 139.6503),
            Asia::Tokyo
        );
        assert_eq!(
            determine_timezone_from_coordinates(50.392189, -3.941355),
            Europe::London
        );
    }
}
