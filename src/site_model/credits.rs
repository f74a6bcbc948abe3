use chrono::Datelike;

static CREDITS_PARSER: once_cell::sync::Lazy<liquid::Parser> = once_cell::sync::Lazy::new(|| {
    liquid::ParserBuilder::with_stdlib()
        .build()
        .expect("stdlib parser has no conflicting tags")
});

/// Current calendar year in local time.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Render the footer credits template with `year` bound.
///
/// This runs once per site config; the result is stored, never re-rendered.
pub fn render_credits(template: &str, year: i32) -> Result<String, liquid::Error> {
    let template = CREDITS_PARSER.parse(template)?;
    let mut globals = liquid::Object::new();
    globals.insert("year".into(), liquid::model::Value::scalar(i64::from(year)));
    let credits = template.render(&globals)?;
    log::debug!("Rendered credits `{credits}`");
    Ok(credits)
}
