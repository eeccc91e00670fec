//! Unit tests for pdp-core value types.

#[cfg(test)]
mod point {
    use crate::{Point, SpatialBounds};

    #[test]
    fn componentwise_order_is_partial() {
        let a = Point::new(0.0, 5.0);
        let b = Point::new(5.0, 0.0);
        assert!(!a.le_componentwise(b));
        assert!(!b.le_componentwise(a));
        assert!(a.le_componentwise(a));
    }

    #[test]
    fn bounds_validity() {
        let ok = SpatialBounds::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        assert!(ok.is_valid());

        // x inverted
        let bad = SpatialBounds::new(Point::new(10.0, 0.0), Point::new(0.0, 5.0));
        assert!(!bad.is_valid());

        // degenerate (min == max) is valid
        let degen = SpatialBounds::new(Point::new(3.0, 3.0), Point::new(3.0, 3.0));
        assert!(degen.is_valid());
    }

    #[test]
    fn bounds_contains() {
        let b = SpatialBounds::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        assert!(b.contains(Point::new(5.0, 5.0)));
        assert!(b.contains(Point::new(0.0, 10.0))); // boundary inclusive
        assert!(!b.contains(Point::new(10.1, 5.0)));
    }

    #[test]
    fn distance() {
        let d = Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0));
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn display() {
        assert_eq!(Point::new(1.5, 2.0).to_string(), "(1.5, 2)");
    }
}

#[cfg(test)]
mod time {
    use crate::{Duration, Time, TimeWindow};

    #[test]
    fn time_arithmetic() {
        let t = Time(10);
        assert_eq!(t.offset(Duration(5)), Time(15));
        assert_eq!(Time(15) - Time(10), 5i64);
        assert_eq!(Time::ZERO, Time(0));
    }

    #[test]
    fn window_validity() {
        assert!(TimeWindow::new(Time(0), Time(100)).is_valid());
        assert!(TimeWindow::new(Time(5), Time(5)).is_valid()); // empty is valid
        assert!(!TimeWindow::new(Time(10), Time(5)).is_valid());
    }

    #[test]
    fn window_contains_half_open() {
        let tw = TimeWindow::new(Time(10), Time(20));
        assert!(tw.contains(Time(10)));
        assert!(tw.contains(Time(19)));
        assert!(!tw.contains(Time(20)));
        assert!(!tw.contains(Time(9)));
    }

    #[test]
    fn window_length() {
        assert_eq!(TimeWindow::new(Time(10), Time(25)).length(), 15);
    }

    #[test]
    fn display() {
        assert_eq!(Time(7).to_string(), "t7");
        assert_eq!(TimeWindow::new(Time(0), Time(3)).to_string(), "[t0, t3)");
    }
}

#[cfg(test)]
mod vehicle {
    use crate::{Point, Time, TimeWindow, VehicleProfile};

    #[test]
    fn basic_profile_is_valid() {
        assert!(VehicleProfile::new(2, 1.0).is_valid());
    }

    #[test]
    fn zero_capacity_or_speed_invalid() {
        assert!(!VehicleProfile::new(0, 1.0).is_valid());
        assert!(!VehicleProfile::new(2, 0.0).is_valid());
        assert!(!VehicleProfile::new(2, -1.0).is_valid());
    }

    #[test]
    fn invalid_availability_window_invalidates_profile() {
        let v = VehicleProfile::new(2, 1.0)
            .with_availability(TimeWindow::new(Time(10), Time(5)));
        assert!(!v.is_valid());
    }

    #[test]
    fn builders_set_fields() {
        let v = VehicleProfile::new(4, 0.5)
            .with_start_position(Point::new(1.0, 2.0))
            .with_availability(TimeWindow::new(Time(0), Time(500)));
        assert_eq!(v.start_position, Some(Point::new(1.0, 2.0)));
        assert_eq!(v.availability, Some(TimeWindow::new(Time(0), Time(500))));
    }
}

#[cfg(test)]
mod event {
    use crate::{
        Duration, EventPayload, EventRecord, EventType, ParcelDetails, Point, Time, TimeWindow,
        VehicleProfile,
    };

    fn parcel() -> ParcelDetails {
        ParcelDetails {
            pickup_location:   Point::new(1.0, 1.0),
            delivery_location: Point::new(2.0, 2.0),
            pickup_window:     TimeWindow::new(Time(0), Time(50)),
            delivery_window:   TimeWindow::new(Time(50), Time(100)),
            pickup_duration:   Duration(5),
            delivery_duration: Duration(5),
            demand: 1,
        }
    }

    #[test]
    fn constructors_match_tags() {
        assert_eq!(EventRecord::parcel(Time(3), parcel()).event_type, EventType::AddParcel);
        assert_eq!(
            EventRecord::vehicle(Time(0), VehicleProfile::new(1, 1.0)).event_type,
            EventType::AddVehicle
        );
        assert_eq!(
            EventRecord::depot(Time(0), Point::new(0.0, 0.0)).event_type,
            EventType::AddDepot
        );
        let t = EventRecord::time_out(Time(900));
        assert_eq!(t.event_type, EventType::TimeOut);
        assert_eq!(t.payload, EventPayload::None);
    }

    #[test]
    fn type_ordering_is_total() {
        assert!(EventType::AddParcel < EventType::AddVehicle);
        assert!(EventType::AddVehicle < EventType::AddDepot);
        assert!(EventType::AddDepot < EventType::TimeOut);
    }

    #[test]
    fn display() {
        assert_eq!(EventRecord::time_out(Time(12)).to_string(), "time-out@t12");
        assert_eq!(EventType::AddParcel.to_string(), "add-parcel");
    }
}
