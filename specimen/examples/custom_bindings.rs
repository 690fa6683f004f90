//! Per-field bindings: override default generation for chosen fields.

use specimen::{Binding, Rand, Sample};

#[derive(Debug, Clone, Copy, PartialEq, Default, Sample)]
enum Tier {
    #[default]
    Free,
    Pro,
    Enterprise,
}

#[derive(Debug, Default, Sample)]
struct Subscription {
    pub owner: String,
    pub seats: u32,
    pub discount: f64,
    pub tier: Tier,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rand = Rand::new();

    let bindings = vec![
        Binding::int(|s: &mut Subscription| &mut s.seats, 5, 50)?,
        Binding::float(|s: &mut Subscription| &mut s.discount, 0.0, 0.25)?,
        Binding::one_of(
            |s: &mut Subscription| &mut s.owner,
            vec!["ops".to_string(), "platform".to_string(), "data".to_string()],
        )?,
        Binding::enumeration(|s: &mut Subscription| &mut s.tier)?,
    ];

    for subscription in rand.many_with::<Subscription>(8, &bindings) {
        println!(
            "{:<10} tier={:?} seats={:>2} discount={:.2}",
            subscription.owner, subscription.tier, subscription.seats, subscription.discount
        );
    }

    // A malformed binding fails before anything is generated
    let err = Binding::int(|s: &mut Subscription| &mut s.seats, 50, 5).unwrap_err();
    println!("rejected: {}", err);

    Ok(())
}
