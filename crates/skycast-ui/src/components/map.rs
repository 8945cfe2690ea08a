use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Map, MapResolution},
        Block, Borders, Paragraph, Wrap,
    },
    Frame,
};
use skycast_weather::{tile_for, MapLayer, WeatherSnapshot, OVERLAY_OPACITY};
use tui_dispatch::Component;

use crate::action::Action;
use crate::state::MapSettings;
use crate::theme::Theme;

/// World map with a marker at the snapshot's position
pub struct WeatherMap;

pub struct WeatherMapProps<'a> {
    pub snapshot: &'a WeatherSnapshot,
    pub layer: MapLayer,
    pub settings: &'a MapSettings,
    pub theme: &'a Theme,
}

/// Text shown in the marker popup
pub fn popup_text(snapshot: &WeatherSnapshot) -> String {
    format!(
        "Current Weather: {:.1} °C / Condition: {}",
        snapshot.temperature, snapshot.description
    )
}

impl Component<Action> for WeatherMap {
    type Props<'a> = WeatherMapProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let theme = props.theme;
        let coord = props.snapshot.coord;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border(false))
            .title(Span::styled(" Weather Map ", theme.title()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [canvas_area, info_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(4)]).areas(inner);

        let marker_color = theme.accent;
        let map_color = theme.muted;
        let canvas = Canvas::default()
            .background_color(theme.background)
            .marker(Marker::Braille)
            .x_bounds([-180.0, 180.0])
            .y_bounds([-90.0, 90.0])
            .paint(move |ctx| {
                ctx.draw(&Map {
                    color: map_color,
                    resolution: MapResolution::High,
                });
                ctx.layer();
                ctx.print(
                    coord.longitude,
                    coord.latitude,
                    Span::styled("●", Style::default().fg(marker_color)),
                );
            });
        frame.render_widget(canvas, canvas_area);

        let tile = tile_for(coord, props.settings.zoom);
        let layer_line = match props.layer.overlay_id() {
            Some(_) => format!(
                "{} (opacity {:.1})",
                props.layer.name(),
                OVERLAY_OPACITY
            ),
            None => props.layer.name().to_string(),
        };

        let info = Paragraph::new(vec![
            Line::from(Span::styled(
                popup_text(props.snapshot),
                Style::default().fg(theme.foreground),
            )),
            Line::from(vec![
                Span::styled("Layer: ", theme.muted()),
                Span::styled(layer_line, theme.key()),
            ]),
            Line::from(Span::styled(
                props.settings.urls.url(props.layer, tile),
                theme.muted(),
            )),
        ])
        .wrap(Wrap { trim: true });
        frame.render_widget(info, info_area);
    }
}
