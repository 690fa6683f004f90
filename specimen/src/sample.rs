//! Default per-type generation via the [`Sample`] trait.
//!
//! `Sample` is what the graph walker falls back to for fields without an
//! explicit binding: integers and floats draw from the configured default
//! ranges, strings consult the fake-data tables by field name, nested
//! composite types recurse, and collection types resolve to their empty
//! default value.

use num_traits::NumCast;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::config::GenerateConfig;
use crate::fake;

/// Types that can produce a random instance of themselves
pub trait Sample: Sized + 'static {
    /// Build a value using the default generation rules for this type
    fn build(rng: &mut dyn rand::RngCore, config: &GenerateConfig) -> Self;

    /// Build a value for a named field
    ///
    /// The default implementation ignores the name; `String` overrides it to
    /// consult the fake-data tables, so a field called `email` gets an email
    /// address rather than random characters.
    fn build_named(name: &str, rng: &mut dyn rand::RngCore, config: &GenerateConfig) -> Self {
        let _ = name;
        Self::build(rng, config)
    }
}

/// Fieldless enums with a derive-emitted variant listing
///
/// Consumed by [`EnumGenerator`](crate::primitives::EnumGenerator), which
/// rejects an empty variant set at construction.
pub trait Enumerated: Sized + 'static {
    /// All declared variants, in declaration order
    fn variants() -> &'static [Self];
}

// Clamp the configured i64 default range into the target integer type. A cast
// can only fail when the configured bound lies outside the type's range, so
// the fallback saturates toward the matching type limit.
macro_rules! impl_sample_int {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {
                fn build(rng: &mut dyn rand::RngCore, config: &GenerateConfig) -> Self {
                    use rand::Rng;
                    let lo = <$t as NumCast>::from(config.int_min)
                        .unwrap_or(if config.int_min < 0 { <$t>::MIN } else { <$t>::MAX });
                    let hi = <$t as NumCast>::from(config.int_max)
                        .unwrap_or(if config.int_max < 0 { <$t>::MIN } else { <$t>::MAX });
                    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
                    rng.gen_range(lo..=hi)
                }
            }
        )*
    };
}

impl_sample_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_sample_float {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {
                fn build(rng: &mut dyn rand::RngCore, config: &GenerateConfig) -> Self {
                    use rand::Rng;
                    rng.gen_range(config.float_min as $t..=config.float_max as $t)
                }
            }
        )*
    };
}

impl_sample_float!(f32, f64);

impl Sample for bool {
    fn build(rng: &mut dyn rand::RngCore, _config: &GenerateConfig) -> Self {
        use rand::Rng;
        rng.r#gen()
    }
}

impl Sample for char {
    fn build(rng: &mut dyn rand::RngCore, _config: &GenerateConfig) -> Self {
        use rand::Rng;
        let code = rng.gen_range(' ' as u32..='~' as u32);
        char::from_u32(code).unwrap_or(' ')
    }
}

impl Sample for String {
    fn build(rng: &mut dyn rand::RngCore, config: &GenerateConfig) -> Self {
        use rand::Rng;
        let length = rng.gen_range(config.string_min_len..=config.string_max_len);
        (0..length)
            .map(|_| {
                const ALPHANUMERIC: &[u8] =
                    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
                ALPHANUMERIC[rng.gen_range(0..ALPHANUMERIC.len())] as char
            })
            .collect()
    }

    fn build_named(name: &str, rng: &mut dyn rand::RngCore, config: &GenerateConfig) -> Self {
        match fake::for_field(name, rng) {
            Some(value) => value,
            None => Self::build(rng, config),
        }
    }
}

impl<T: Sample> Sample for Option<T> {
    fn build(rng: &mut dyn rand::RngCore, config: &GenerateConfig) -> Self {
        use rand::Rng;
        if rng.r#gen() {
            Some(T::build(rng, config))
        } else {
            None
        }
    }

    fn build_named(name: &str, rng: &mut dyn rand::RngCore, config: &GenerateConfig) -> Self {
        use rand::Rng;
        if rng.r#gen() {
            Some(T::build_named(name, rng, config))
        } else {
            None
        }
    }
}

impl<T: Sample> Sample for Box<T> {
    fn build(rng: &mut dyn rand::RngCore, config: &GenerateConfig) -> Self {
        Box::new(T::build(rng, config))
    }

    fn build_named(name: &str, rng: &mut dyn rand::RngCore, config: &GenerateConfig) -> Self {
        Box::new(T::build_named(name, rng, config))
    }
}

// Unbounded collection fields stay at their default empty value; callers who
// want populated collections bind an explicit generator for the field.
macro_rules! impl_sample_empty_collection {
    ($($name:ident < $($p:ident),+ >),* $(,)?) => {
        $(
            impl<$($p: 'static),+> Sample for $name<$($p),+>
            where
                $name<$($p),+>: Default,
            {
                fn build(_rng: &mut dyn rand::RngCore, _config: &GenerateConfig) -> Self {
                    Self::default()
                }
            }
        )*
    };
}

impl_sample_empty_collection!(
    Vec<T>,
    HashMap<K, V>,
    HashSet<T>,
    BTreeMap<K, V>,
    BTreeSet<T>,
);

#[cfg(feature = "chrono")]
mod chrono_impls {
    use super::*;
    use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

    // A hundred-year window starting one day past the epoch, so generated
    // timestamps never collide with the epoch default.
    const MIN_TIMESTAMP: i64 = 86_400;
    const MAX_TIMESTAMP: i64 = 3_155_760_000;

    impl Sample for DateTime<Utc> {
        fn build(rng: &mut dyn rand::RngCore, _config: &GenerateConfig) -> Self {
            use rand::Rng;
            let secs = rng.gen_range(MIN_TIMESTAMP..=MAX_TIMESTAMP);
            DateTime::from_timestamp(secs, 0).unwrap_or(DateTime::UNIX_EPOCH)
        }
    }

    impl Sample for NaiveDateTime {
        fn build(rng: &mut dyn rand::RngCore, config: &GenerateConfig) -> Self {
            DateTime::<Utc>::build(rng, config).naive_utc()
        }
    }

    impl Sample for NaiveDate {
        fn build(rng: &mut dyn rand::RngCore, config: &GenerateConfig) -> Self {
            DateTime::<Utc>::build(rng, config).date_naive()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::thread_rng;

    #[test]
    fn test_int_defaults_within_config_range() {
        let mut rng = thread_rng();
        let config = GenerateConfig::default();

        for _ in 0..1000 {
            let value = i32::build(&mut rng, &config);
            assert!((0..=100).contains(&value));
        }
    }

    #[test]
    fn test_int_defaults_clamp_to_type_range() {
        let mut rng = thread_rng();
        let config = GenerateConfig::new(-500, 500, 0.0, 1.0, 0, 4).unwrap();

        for _ in 0..1000 {
            // i8 cannot hold the full configured range; bounds saturate
            let value = i8::build(&mut rng, &config);
            assert!((i8::MIN..=i8::MAX).contains(&value));

            let unsigned = u8::build(&mut rng, &config);
            assert!(unsigned <= u8::MAX);
        }
    }

    #[test]
    fn test_unsigned_defaults_with_negative_config_min() {
        let mut rng = thread_rng();
        let config = GenerateConfig::new(-10, 10, 0.0, 1.0, 0, 4).unwrap();

        for _ in 0..1000 {
            let value = u32::build(&mut rng, &config);
            assert!(value <= 10);
        }
    }

    #[test]
    fn test_float_defaults_within_config_range() {
        let mut rng = thread_rng();
        let config = GenerateConfig::default();

        for _ in 0..1000 {
            let value = f64::build(&mut rng, &config);
            assert!((0.0..=100.0).contains(&value));
        }
    }

    #[test]
    fn test_string_default_length() {
        let mut rng = thread_rng();
        let config = GenerateConfig::default();

        for _ in 0..200 {
            let value = String::build(&mut rng, &config);
            assert!((config.string_min_len..=config.string_max_len).contains(&value.len()));
            assert!(value.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_string_named_field_uses_fake_data() {
        let mut rng = StdRng::seed_from_u64(11);
        let config = GenerateConfig::default();

        for _ in 0..50 {
            let surname = String::build_named("surname", &mut rng, &config);
            assert!(fake::SURNAMES.contains(&surname.as_str()));

            let email = String::build_named("email", &mut rng, &config);
            assert!(email.contains('@'));
        }
    }

    #[test]
    fn test_string_unrecognized_name_falls_back() {
        let mut rng = thread_rng();
        let config = GenerateConfig::default();

        let value = String::build_named("widget_code", &mut rng, &config);
        assert!((config.string_min_len..=config.string_max_len).contains(&value.len()));
    }

    #[test]
    fn test_option_produces_both_variants() {
        let mut rng = StdRng::seed_from_u64(5);
        let config = GenerateConfig::default();

        let mut seen_some = false;
        let mut seen_none = false;
        for _ in 0..100 {
            match Option::<i32>::build(&mut rng, &config) {
                Some(value) => {
                    assert!((0..=100).contains(&value));
                    seen_some = true;
                }
                None => seen_none = true,
            }
        }
        assert!(seen_some && seen_none);
    }

    #[test]
    fn test_collections_stay_empty() {
        let mut rng = thread_rng();
        let config = GenerateConfig::default();

        assert!(Vec::<i32>::build(&mut rng, &config).is_empty());
        assert!(HashMap::<String, i32>::build(&mut rng, &config).is_empty());
        assert!(HashSet::<u8>::build(&mut rng, &config).is_empty());
        assert!(BTreeMap::<String, bool>::build(&mut rng, &config).is_empty());
        assert!(BTreeSet::<i64>::build(&mut rng, &config).is_empty());
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_datetime_never_epoch_default() {
        use chrono::{DateTime, Utc};

        let mut rng = thread_rng();
        let config = GenerateConfig::default();

        for _ in 0..100 {
            let value = DateTime::<Utc>::build(&mut rng, &config);
            assert_ne!(value, DateTime::UNIX_EPOCH);
        }
    }
}
