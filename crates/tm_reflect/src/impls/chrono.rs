use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};

crate::impl_reflect_opaque!(DateTime<Utc>, DateTime<FixedOffset>, DateTime<Local>);
crate::impl_reflect_opaque!(NaiveDate, NaiveTime, NaiveDateTime);
crate::impl_reflect_opaque!(FixedOffset, TimeDelta);

#[cfg(test)]
mod tests {
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};

    use crate::info::{ReflectKind, TypePath};
    use crate::{FromReflect, Reflect};

    #[test]
    fn timestamps_are_leaves() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(at.reflect_kind(), ReflectKind::Opaque);
        assert_eq!(<DateTime<Utc>>::type_name(), "DateTime<Utc>");

        let mut other = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        other.try_apply(&at).unwrap();
        assert_eq!(other, at);

        let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert!(other.try_apply(&day).is_err());
        assert_eq!(NaiveDate::from_reflect(&day), Some(day));
    }
}
