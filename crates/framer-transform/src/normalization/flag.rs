/// `true` only for the literal `"1"`; missing input is `false`.
pub fn boolean_from_flag(value: Option<&str>) -> bool {
    value == Some("1")
}
