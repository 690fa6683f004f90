//! Basic usage: derive Sample, generate one or many instances.

use specimen::{Rand, Sample};

#[derive(Debug, Default, Sample)]
struct Customer {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub country: String,
    pub age: u8,
    pub active: bool,
}

fn main() {
    let mut rand = Rand::new();

    let one: Customer = rand.one();
    println!("one customer: {:?}", one);

    let many: Vec<Customer> = rand.many(5);
    for customer in &many {
        println!(
            "{} {} <{}> from {}",
            customer.name, customer.surname, customer.email, customer.country
        );
    }

    // Seeded facades replay the same sequence
    let replay: Customer = Rand::with_seed(7).one();
    let again: Customer = Rand::with_seed(7).one();
    assert_eq!(replay.email, again.email);
    println!("seeded replay: {}", replay.email);
}
