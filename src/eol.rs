/// Converts text to the LF-only working form.
///
/// CRLF pairs become LF first; any carriage return left over after that was
/// never part of a pair and becomes a single space.
pub fn to_working_form(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', " ")
}

/// Converts every LF to CRLF. Input is expected to be in working form.
pub fn to_crlf(text: &str) -> String {
    text.replace('\n', "\r\n")
}
