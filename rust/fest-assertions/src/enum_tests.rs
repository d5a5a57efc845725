use crate::*;

#[derive(EnumAssertions, Debug)]
enum TestOne {
    A,
    B,
}

#[test]
fn enum_is_variant_should_not_panic_if_matches() {
    TestOne::A.should().is_a();
}

#[test]
fn enum_is_variant_should_panic_if_not_matches() {
    should_fail_with_exact_message!(TestOne::B.should().is_a(), "expected:<TestOne::A> but was:<B>");
}

#[test]
fn enum_is_variant_keeps_description() {
    should_fail_with_exact_message!(
        TestOne::A.should().described_as("state").is_b(),
        "[state] expected:<TestOne::B> but was:<A>"
    );
}

#[test]
fn enum_is_variant_chains_with_other_assertions() {
    TestOne::A.should().is_a().is_not_null().matches(|v| !matches!(v, TestOne::B));
}

#[allow(dead_code)]
#[derive(EnumAssertions, Debug)]
enum TestTwo {
    A(u32),
    B(String, bool, f64),
    C { c1: String, c2: bool, c3: f32 },
    SecondWord,
}

#[test]
fn variant_with_unnamed_fields() {
    TestTwo::A(5).should().is_a();
    TestTwo::B("Hello".to_owned(), true, 42.0).should().is_b();

    should_fail_with_exact_message!(TestTwo::A(5).should().is_b(), "expected:<TestTwo::B> but was:<A(5)>");
}

#[test]
fn variant_with_named_fields() {
    TestTwo::C {
        c1: "Hello".to_owned(),
        c2: true,
        c3: 42.0,
    }
    .should()
    .is_c();

    should_fail_with_message!(
        TestTwo::C {
            c1: "Hello".to_owned(),
            c2: true,
            c3: 42.0,
        }
        .should()
        .is_a(),
        "expected:<TestTwo::A> but was:<C { c1: \"Hello\", *}>"
    );
}

#[test]
fn multi_word_variant_is_snake_cased() {
    TestTwo::SecondWord.should().is_second_word();
}

#[test]
fn references_to_enums_are_supported() {
    (&TestTwo::A(5)).should().is_a();
    assert_that(&TestOne::B).is_b();
}

#[test]
fn null_enum_fails_not_null_precondition() {
    should_fail_with_exact_message!(
        assert_that_nullable(None::<TestOne>).is_a(),
        "expecting actual value not to be null"
    );
}
