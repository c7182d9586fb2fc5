// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    /// Lowercase, transliterate and dash-join `input`. May return an empty
    /// string when nothing in the input survives.
    fn slugify(&self, input: &str) -> String;
}
