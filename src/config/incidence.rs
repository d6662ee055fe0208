use std::collections::HashMap;
use lazy_static::lazy_static;

/// Default incidence for subject names the table doesn't know.
pub const FALLBACK_INCIDENCE: f64 = 5.0;

lazy_static! {
    /// Historical exam-incidence percentages per subject name, consulted
    /// only at subject creation when the caller does not supply a value.
    /// Exact string match; unknown names get FALLBACK_INCIDENCE.
    static ref DEFAULT_INCIDENCE: HashMap<&'static str, f64> = {
        let mut m = HashMap::new();
        m.insert("Português", 15.5);
        m.insert("Matemática", 8.2);
        m.insert("Raciocínio Lógico", 7.5);
        m.insert("Direito Constitucional", 12.0);
        m.insert("Direito Administrativo", 11.5);
        m.insert("Informática", 6.0);
        m.insert("Contabilidade", 5.0);
        m.insert("Inglês", 4.0);
        m.insert("Direito Penal", 9.0);
        m.insert("Direito Processual Penal", 8.5);
        m
    };
}

/// Look up the default incidence for a subject name.
pub fn default_incidence(name: &str) -> f64 {
    DEFAULT_INCIDENCE
        .get(name)
        .copied()
        .unwrap_or(FALLBACK_INCIDENCE)
}
