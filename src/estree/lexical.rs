use icu_properties::{
    props::{IdContinue, IdStart},
    CodePointSetData,
};

/// Can this character appear as the first character of an identifier.
fn is_id_start_ascii(char: char) -> bool {
    match char {
        'a'..='z' | 'A'..='Z' | '_' | '$' => true,
        _ => false,
    }
}

/// Can this character appear in an identifier (after the first character).
fn is_id_part_ascii(char: char) -> bool {
    match char {
        'a'..='z' | 'A'..='Z' | '0'..='9' | '_' | '$' => true,
        _ => false,
    }
}

#[inline]
fn is_id_start_unicode(char: char) -> bool {
    CodePointSetData::new::<IdStart>().contains(char)
}

#[inline]
fn is_id_part_unicode(char: char) -> bool {
    // Either part of the unicode ID_Continue, ZWNJ, or ZWJ
    CodePointSetData::new::<IdContinue>().contains(char) || char == '\u{200C}' || char == '\u{200D}'
}

#[inline]
fn is_id_start(char: char) -> bool {
    if char.is_ascii() {
        is_id_start_ascii(char)
    } else {
        is_id_start_unicode(char)
    }
}

#[inline]
fn is_id_part(char: char) -> bool {
    if char.is_ascii() {
        is_id_part_ascii(char)
    } else {
        is_id_part_unicode(char)
    }
}

/// Whether the string matches the lexical grammar of an IdentifierName. Escape sequences are not
/// interpreted, the string must already be in its cooked form.
pub fn is_identifier_name(str: &str) -> bool {
    let mut chars = str.chars();
    match chars.next() {
        Some(first) if is_id_start(first) => chars.all(is_id_part),
        _ => false,
    }
}

/// Whether the string is a reserved word, which cannot be used as an identifier reference or
/// binding. Some words are only reserved in strict mode code.
pub fn is_reserved_word(str: &str, in_strict_mode: bool) -> bool {
    match str {
        // Names that are always reserved
        "break" | "case" | "catch" | "class" | "const" | "continue" | "debugger" | "default"
        | "delete" | "do" | "else" | "enum" | "export" | "extends" | "false" | "finally"
        | "for" | "function" | "if" | "import" | "in" | "instanceof" | "new" | "null"
        | "return" | "super" | "switch" | "this" | "throw" | "true" | "try" | "typeof" | "var"
        | "void" | "while" | "with" => true,
        // Names that are only reserved in strict mode
        "implements" | "interface" | "let" | "package" | "private" | "protected" | "public"
        | "static" | "yield" => in_strict_mode,
        _ => false,
    }
}

/// Names that cannot be bound or assigned in strict mode code.
pub fn is_restricted_strict_name(str: &str) -> bool {
    str == "eval" || str == "arguments"
}
