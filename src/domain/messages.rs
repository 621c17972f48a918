// User-facing HUD texts. The game ships in Spanish, so these stay localized.

pub const PROFILE_CREATE_FAILED: &str = "Error creando perfil (nombre inválido o duplicado)";
pub const PROFILE_REQUIRED: &str = "Crea un perfil primero";
pub const PROFILE_NOT_FOUND: &str = "Perfil no encontrado";
pub const PROFILE_SAVE_FAILED: &str = "Error guardando perfil";
pub const DEFEAT: &str = "Derrota. Vuelve a intentarlo.";

// Used when a defeated boss arrives without a name.
pub const UNNAMED_BOSS: &str = "el jefe";

pub fn victory(enemy: &str) -> String {
    format!("¡Victoria! Derrotaste a {enemy}.")
}

pub fn active_profile(name: &str) -> String {
    format!("Perfil activo: {name}")
}

pub fn profile_saved(name: &str) -> String {
    format!("Perfil guardado: {name}")
}
