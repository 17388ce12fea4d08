//! Handler für Store-Operationen (Undo, Leeren, Summieren, Neuaufbau).

use crate::app::use_cases;
use crate::app::AppState;

/// Entfernt die zuletzt gespeicherte Kurve.
pub fn remove_last(state: &mut AppState) {
    if state.curves.remove_last().is_some() {
        log::info!("Letzte Kurve entfernt ({} verbleibend)", state.curves.len());
    } else {
        log::debug!("Undo: nichts zu tun");
    }
}

/// Entfernt alle Kurven.
pub fn clear(state: &mut AppState) {
    let count = state.curves.len();
    state.curves.clear();
    log::info!("{} Kurve(n) entfernt", count);
}

/// Fasst alle Kurven zu einer Summenkurve zusammen.
pub fn sum(state: &mut AppState) {
    use_cases::aggregate::sum_all(&mut state.curves);
}

/// Baut alle Szene-Objekte neu auf.
pub fn regenerate(state: &mut AppState) {
    state.curves.regenerate_visuals();
    log::debug!("Szene neu aufgebaut ({} Objekte)", state.curves.len());
}
