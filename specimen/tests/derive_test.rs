//! Tests for the Sample derive: schema eligibility, nested generation, enums.

use specimen::{EnumGenerator, Enumerated, Rand, Sample};

#[derive(Debug, Default, Sample)]
struct NestedClass {
    pub nested_text: String,
    pub nested_number: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Sample)]
enum Status {
    Active,
    Inactive,
    Pending,
}

#[derive(Debug, Sample)]
struct ClassToGenerate {
    pub text: String,
    pub number: i32,
    pub ratio: f64,
    pub flag: bool,
    pub status: Status,
    pub nested: NestedClass,
    pub tags: Vec<String>,
    #[sample(skip)]
    pub audit_token: String,
    locked: i32,
}

impl Default for ClassToGenerate {
    fn default() -> Self {
        Self {
            text: String::new(),
            number: 0,
            ratio: 0.0,
            flag: false,
            status: Status::Active,
            nested: NestedClass::default(),
            tags: Vec::new(),
            audit_token: String::new(),
            locked: 12,
        }
    }
}

impl ClassToGenerate {
    fn locked(&self) -> i32 {
        self.locked
    }
}

const COLLECTION_SIZE: usize = 12;

#[test]
fn generated_items_are_fully_populated() {
    let mut rand = Rand::new();
    let generated: Vec<ClassToGenerate> = rand.many(COLLECTION_SIZE);
    assert_eq!(generated.len(), COLLECTION_SIZE);

    for item in &generated {
        assert!(!item.text.is_empty());
        assert!((0..=100).contains(&item.number));
        assert!((0.0..=100.0).contains(&item.ratio));
    }
}

#[test]
fn private_fields_are_not_overridden() {
    let mut rand = Rand::new();
    let generated: ClassToGenerate = rand.one();
    assert_eq!(generated.locked(), 12);
}

#[test]
fn skipped_fields_keep_their_default() {
    let mut rand = Rand::new();
    let generated: ClassToGenerate = rand.one();
    assert!(generated.audit_token.is_empty());
}

#[test]
fn collection_fields_stay_empty() {
    let mut rand = Rand::new();
    let generated: ClassToGenerate = rand.one();
    assert!(generated.tags.is_empty());
}

#[test]
fn nested_classes_are_generated() {
    let mut rand = Rand::new();
    let generated: ClassToGenerate = rand.one();
    assert!(!generated.nested.nested_text.is_empty());
    assert!(generated.nested.nested_number <= 100);
}

#[test]
fn enum_fields_draw_declared_variants() {
    let mut rand = Rand::new();
    let generated: Vec<ClassToGenerate> = rand.many(50);

    let mut seen = [false; 3];
    for item in &generated {
        match item.status {
            Status::Active => seen[0] = true,
            Status::Inactive => seen[1] = true,
            Status::Pending => seen[2] = true,
        }
    }
    // 50 draws over three variants; each should appear
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn fieldless_enum_lists_variants_in_declaration_order() {
    assert_eq!(
        Status::variants(),
        &[Status::Active, Status::Inactive, Status::Pending]
    );
}

#[derive(Debug, Clone, Sample)]
enum Vacant {}

#[test]
fn empty_enum_is_rejected_by_enum_generator() {
    let result = EnumGenerator::<Vacant>::new();
    assert!(result.is_err());
}

#[derive(Debug, Clone, Sample)]
enum Shape {
    Point,
    Circle(f64),
    Rect { width: f64, height: f64 },
}

#[test]
fn payload_enum_variants_are_generated() {
    let mut rand = Rand::with_seed(17);

    let mut seen_point = false;
    let mut seen_circle = false;
    let mut seen_rect = false;
    for shape in rand.many::<Shape>(100) {
        match shape {
            Shape::Point => seen_point = true,
            Shape::Circle(radius) => {
                assert!((0.0..=100.0).contains(&radius));
                seen_circle = true;
            }
            Shape::Rect { width, height } => {
                assert!((0.0..=100.0).contains(&width));
                assert!((0.0..=100.0).contains(&height));
                seen_rect = true;
            }
        }
    }
    assert!(seen_point && seen_circle && seen_rect);
}

#[derive(Debug, Default, Sample)]
struct Wrapper<T> {
    pub inner: T,
    pub label: String,
}

#[test]
fn generic_structs_are_supported() {
    let mut rand = Rand::new();
    let wrapper: Wrapper<u8> = rand.one();
    assert!(wrapper.inner <= 100);
    assert!(!wrapper.label.is_empty());
}

#[derive(Debug, Default, Sample)]
struct OptionalParts {
    pub note: Option<String>,
    pub boxed: Box<u32>,
}

#[test]
fn option_and_box_fields_are_generated() {
    let mut rand = Rand::with_seed(23);

    let mut seen_some = false;
    let mut seen_none = false;
    for parts in rand.many::<OptionalParts>(100) {
        assert!(*parts.boxed <= 100);
        match parts.note {
            Some(ref text) => {
                assert!(!text.is_empty());
                seen_some = true;
            }
            None => seen_none = true,
        }
    }
    assert!(seen_some && seen_none);
}
