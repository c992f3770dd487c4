use ratatui::backend::TestBackend;
use ratatui::Terminal;
use serde_json::json;

use tackleBox::app::settings::Settings;
use tackleBox::app::{App, View};
use tackleBox::data::{DataManager, EquipmentKind, Record};
use tackleBox::ui;

fn record(kind: EquipmentKind, v: serde_json::Value) -> Record {
    let fields = v.as_object().cloned().unwrap();
    Record::new(EquipmentKind::detect(kind, &fields), fields)
}

fn sample_data() -> DataManager {
    DataManager::from_records(
        vec![
            record(
                EquipmentKind::Rod,
                json!({"name": "Float Master", "type": "match", "category": "SpinningReel&Bobber", "price": "450 CC"}),
            ),
            // no `type`: rendered as an unknown item
            record(EquipmentKind::Rod, json!({"name": "Mystery Stick", "category": "Other"})),
        ],
        vec![],
        vec![record(EquipmentKind::Fish, json!({"name": "Northern Pike", "habitats": ["River", "Lake"]}))],
        vec![],
    )
}

fn draw(app: &App, width: u16, height: u16) -> Vec<String> {
    let mut term = Terminal::new(TestBackend::new(width, height)).unwrap();
    term.draw(|f| ui::ui(f, app)).unwrap();
    let buf = term.backend().buffer().clone();
    (0..buf.area().height)
        .map(|y| {
            (0..buf.area().width)
                .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
                .collect()
        })
        .collect()
}

fn screen_contains(lines: &[String], needle: &str) -> bool {
    lines.iter().any(|l| l.contains(needle))
}

#[test]
fn nav_bar_shows_every_view_label() {
    let app = App::new(Settings::default(), sample_data(), (120, 40));
    let lines = draw(&app, 120, 40);
    // labels sit on the content row of the bordered buttons
    for label in ["Fish", "Lakes", "Rod Setup", "Reels"] {
        assert!(lines[1].contains(label), "missing {} in {:?}", label, lines[1]);
    }
    assert!(screen_contains(&lines, "Search here..."));
}

#[test]
fn rod_view_renders_headers_and_cards() {
    let app = App::new(Settings::default(), sample_data(), (120, 40));
    let lines = draw(&app, 120, 40);
    assert!(screen_contains(&lines, "=== SpinningReel&Bobber ==="));
    assert!(screen_contains(&lines, "Name: Float Master"));
    assert!(screen_contains(&lines, "▸ Additional Info"));
    assert!(screen_contains(&lines, "Unknown item type"));
    assert!(screen_contains(&lines, "Rod Setup: 2 items"));
}

#[test]
fn empty_view_shows_no_data_message() {
    let mut app = App::new(Settings::default(), sample_data(), (100, 30));
    app.switch_to(View::Reels);
    let lines = draw(&app, 100, 30);
    assert!(screen_contains(&lines, "No data available"));
}

#[test]
fn failed_search_shows_no_results_message() {
    let mut app = App::new(Settings::default(), sample_data(), (100, 30));
    app.search.text = "zzz".into();
    app.run_search();
    let lines = draw(&app, 100, 30);
    assert!(screen_contains(&lines, "No rods found matching your search."));
    assert!(screen_contains(&lines, "search: \"zzz\""));
}

#[test]
fn fish_cards_list_every_field() {
    let mut app = App::new(Settings::default(), sample_data(), (100, 30));
    app.switch_to(View::Fish);
    let lines = draw(&app, 100, 30);
    assert!(screen_contains(&lines, "Name: Northern Pike"));
    assert!(screen_contains(&lines, "Habitats: River, Lake"));
}

#[test]
fn tiny_terminal_does_not_panic() {
    let app = App::new(Settings::default(), sample_data(), (12, 5));
    let lines = draw(&app, 12, 5);
    assert_eq!(lines.len(), 5);
}
