use widechar_width::{classify, WcWidth};

#[test]
fn ascii() {
    assert_eq!(classify(0x41), WcWidth::One);
    assert_eq!(classify(0x20), WcWidth::One);
    assert_eq!(classify(0x7E), WcWidth::One);
    assert_eq!(classify(0x1F), WcWidth::NonPrint);
    assert_eq!(classify(0x7F), WcWidth::NonPrint);
    assert_eq!(classify(0x41).code(), 1);
}

#[test]
fn nonprint() {
    // ZERO WIDTH SPACE is a format character.
    assert_eq!(classify(0x200B), WcWidth::NonPrint);
    assert_eq!(classify(0x200B).code(), -1);
    assert_eq!(classify(0x00AD), WcWidth::NonPrint);
    assert_eq!(classify(0x2028), WcWidth::NonPrint);
    assert_eq!(classify(0xD800), WcWidth::NonPrint);
    assert_eq!(classify(0xDFFF), WcWidth::NonPrint);
}

#[test]
fn double_wide() {
    assert_eq!(classify(0x3042), WcWidth::Two);
    assert_eq!(classify(0x3042).code(), 2);
    assert_eq!(classify(0x3000), WcWidth::Two);
    assert_eq!(classify(0xFF01), WcWidth::Two);
    assert_eq!(classify(0x1100), WcWidth::Two);
    assert_eq!(classify(0x4DBF), WcWidth::Two);
    assert_eq!(classify(0x1F923), WcWidth::Two);
    assert_eq!(classify(0xFF61), WcWidth::One);
}

#[test]
fn private_use() {
    assert_eq!(classify(0xE000), WcWidth::PrivateUse);
    assert_eq!(classify(0xE000).code(), -4);
    assert_eq!(classify(0xF8FF), WcWidth::PrivateUse);
    assert_eq!(classify(0x10FFFD), WcWidth::PrivateUse);
}

#[test]
fn combining() {
    assert_eq!(classify(0x0301), WcWidth::Combining);
    assert_eq!(classify(0xFE0F), WcWidth::Combining);
    assert_eq!(classify(0xE0100), WcWidth::Combining);
}

#[test]
fn ambiguous() {
    assert_eq!(classify(0x00A1), WcWidth::Ambiguous);
    assert_eq!(classify(0xFFFD), WcWidth::Ambiguous);
}

#[test]
fn noncharacters() {
    assert_eq!(classify(0xFDD0), WcWidth::NonCharacter);
    assert_eq!(classify(0xFDEF), WcWidth::NonCharacter);
    assert_eq!(classify(0xFDF0), WcWidth::One);
    assert_eq!(classify(0xFFFE), WcWidth::NonCharacter);
    assert_eq!(classify(0x2FFFE), WcWidth::NonCharacter);
    assert_eq!(classify(0x3FFFE), WcWidth::NonCharacter);
    assert_eq!(classify(0x10FFFF), WcWidth::NonCharacter);
}

#[test]
fn unassigned() {
    assert_eq!(classify(0x40000), WcWidth::Unassigned);
    assert_eq!(classify(0xE0000), WcWidth::Unassigned);
}

#[test]
fn widened_in_9() {
    assert_eq!(classify(0x231A), WcWidth::WidenedIn9);
    assert_eq!(classify(0x1F300), WcWidth::WidenedIn9);
    assert_eq!(classify(0x1F600), WcWidth::WidenedIn9);
    assert_eq!(classify(0x1F600).width_unicode_8_or_earlier(), 1);
    assert_eq!(classify(0x1F600).width_unicode_9_or_later(), 2);
}

#[test]
fn in_no_table() {
    assert_eq!(classify(0x00A0), WcWidth::One);
    assert_eq!(classify(0x2716), WcWidth::One);
    assert_eq!(classify(0x4DC0), WcWidth::One);
    assert_eq!(classify(0x110000), WcWidth::One);
}
