use pattern_recipe::abstract_factory::{
    run_demo, Animal, AnimalCreator, Cat, PetShop, RandomAnimal, ShopError, Species,
};
use std::fmt;

/// Splits shop output into (name, sound) pairs, skipping blank and separator lines.
fn parse_pets(output: &str) -> Vec<(String, String)> {
    let lines: Vec<&str> = output
        .lines()
        .filter(|line| !line.is_empty() && !line.starts_with('='))
        .collect();

    lines
        .chunks(2)
        .map(|pair| {
            let name = pair[0]
                .strip_prefix("We have a lovely ")
                .expect("name line");
            let sound = pair[1].strip_prefix("It says ").expect("sound line");
            (name.to_string(), sound.to_string())
        })
        .collect()
}

fn show(shop: &PetShop, times: usize) -> String {
    let mut out = Vec::new();
    for _ in 0..times {
        shop.show_pet(&mut out).expect("show_pet failed");
    }
    String::from_utf8(out).expect("utf-8 output")
}

/// A fixed creator always yields the same name and sound.
#[test]
fn test_cat_shop_always_shows_a_cat() {
    let shop = PetShop::new(Species::Cat);

    let pets = parse_pets(&show(&shop, 5));
    assert_eq!(pets.len(), 5);
    for (name, sound) in pets {
        assert_eq!(name, "Cat");
        assert_eq!(sound, "meow");
    }
}

/// Plain closures work as creators.
#[test]
fn test_closure_creator() {
    let shop = PetShop::new(|| -> Box<dyn Animal> { Box::new(Cat) });
    assert_eq!(show(&shop, 1), "We have a lovely Cat\nIt says meow\n");
}

/// A random creator over {Dog, Cat} never produces anything else, and every sound
/// matches its name.
#[test]
fn test_random_shop_only_shows_registered_variants() {
    let shop = PetShop::new(RandomAnimal::default());

    let pets = parse_pets(&show(&shop, 100));
    assert_eq!(pets.len(), 100);
    for (name, sound) in pets {
        match name.as_str() {
            "Dog" => assert_eq!(sound, "woof"),
            "Cat" => assert_eq!(sound, "meow"),
            other => panic!("unregistered variant {other}"),
        }
    }
}

#[test]
fn test_shop_without_creator_fails() {
    let shop = PetShop::default();

    let mut out = Vec::new();
    let err = shop.show_pet(&mut out).unwrap_err();
    assert!(matches!(err, ShopError::MissingCreator));
    assert_eq!(err.to_string(), "Pet shop has no animal creator to invoke");
}

// --- A variant defined outside the library ---

#[derive(Debug)]
struct Parrot;

impl Animal for Parrot {
    fn speak(&self) -> &'static str {
        "squawk"
    }
}

impl fmt::Display for Parrot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Parrot")
    }
}

/// New variants plug into the random creator without touching the shop.
#[test]
fn test_random_shop_with_custom_variant() {
    let creators: Vec<Box<dyn AnimalCreator>> = vec![
        Box::new(Species::Dog),
        Box::new(|| -> Box<dyn Animal> { Box::new(Parrot) }),
    ];
    let creator = RandomAnimal::from_creators(creators).expect("two creators");
    assert_eq!(creator.variant_count(), 2);

    let shop = PetShop::new(creator);
    for (name, sound) in parse_pets(&show(&shop, 50)) {
        match name.as_str() {
            "Dog" => assert_eq!(sound, "woof"),
            "Parrot" => assert_eq!(sound, "squawk"),
            other => panic!("unregistered variant {other}"),
        }
    }
}

/// Three registered creators are each picked about a third of the time.
#[test]
fn test_random_creator_is_uniform_over_three_variants() {
    const DRAWS: usize = 10_000;
    const TOLERANCE: usize = DRAWS / 20;

    let creators: Vec<Box<dyn AnimalCreator>> = vec![
        Box::new(Species::Dog),
        Box::new(Species::Cat),
        Box::new(|| -> Box<dyn Animal> { Box::new(Parrot) }),
    ];
    let creator = RandomAnimal::from_creators(creators).expect("three creators");

    let mut counts = [0usize; 3];
    for _ in 0..DRAWS {
        match creator.create().to_string().as_str() {
            "Dog" => counts[0] += 1,
            "Cat" => counts[1] += 1,
            "Parrot" => counts[2] += 1,
            other => panic!("unregistered variant {other}"),
        }
    }

    let expected = DRAWS / 3;
    for (name, count) in ["Dog", "Cat", "Parrot"].iter().zip(counts) {
        assert!(
            count.abs_diff(expected) <= TOLERANCE,
            "{name} picked {count} times, expected about {expected}"
        );
    }
}

/// The demo shows one cat, a blank line, then three random pets with separators.
#[test]
fn test_demo_layout() {
    let mut out = Vec::new();
    run_demo(&mut out).unwrap();
    let output = String::from_utf8(out).unwrap();

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 12);
    assert_eq!(lines[0], "We have a lovely Cat");
    assert_eq!(lines[1], "It says meow");
    assert_eq!(lines[2], "");
    for separator in [lines[5], lines[8], lines[11]] {
        assert_eq!(separator, "=".repeat(20));
    }

    let pets = parse_pets(&output);
    assert_eq!(pets.len(), 4);
    for (name, _) in &pets[1..] {
        assert!(name == "Dog" || name == "Cat");
    }
}
