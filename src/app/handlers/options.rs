//! Handler für Laufzeit-Optionen.

use crate::app::AppState;
use crate::render::SceneStyle;
use crate::shared::TerrainOptions;

/// Übernimmt neue Optionen in Session und Szene.
///
/// Geänderte Darstellungswerte führen zum Neuaufbau aller Szene-Objekte,
/// eine laufende Vorschau wird in der Szene ersetzt.
pub fn apply(state: &mut AppState, options: TerrainOptions) {
    let options = options.validated();
    state.session.set_smoothing(options.smoothing());

    let style = SceneStyle::from_options(&options);
    if *state.curves.sink().style() != style {
        state.curves.sink_mut().set_style(style);
        state.curves.regenerate_visuals();
    }

    // Vorschau mit neuer Glättung und neuem Stil sofort nachziehen
    if state.session.is_recording() {
        state.curves.show_preview(state.session.preview());
    }

    state.options = options;
    log::info!("Optionen übernommen");
}

/// Speichert die aktuellen Optionen.
pub fn save(state: &AppState, path: &std::path::Path) -> anyhow::Result<()> {
    state.options.save_to_file(path)
}
