//! Localized unlock prompt.

/// Prompt used for unknown or missing languages.
pub const DEFAULT_TEXT: &str = "Type password to unlock";

/// Prompt text for a `LANG` value such as `de_DE.UTF-8`.
pub fn localized_text(lang: Option<&str>) -> &'static str {
    match lang.and_then(|lang| lang.get(..2)) {
        Some("de") => "Bitte Passwort eingeben",
        Some("es") => "Ingrese su contraseña",
        Some("fr") => "Entrez votre mot de passe",
        Some("pl") => "Podaj hasło",
        _ => DEFAULT_TEXT,
    }
}
