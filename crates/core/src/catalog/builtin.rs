use std::collections::BTreeMap;

use crate::model::{
    Briefing, Diagnosis, DiagnosisOption, Difficulty, Hint, OptionId, Scenario, ScenarioId,
    Solution, TargetCssProperties,
};
use crate::validation::{Rule, RuleBook};

pub(super) fn scenarios() -> (Vec<Scenario>, RuleBook) {
    let scenarios = vec![invisible_button(), sticky_text(), broken_gallery()];
    let rules = RuleBook::new()
        .with_rule(
            ScenarioId::new("1-invisible-button"),
            Rule::new(
                ["background-color", ".cta-button"],
                "Hast du dem .cta-button eine background-color gegeben?",
            ),
        )
        .with_rule(
            ScenarioId::new("2-sticky-text"),
            Rule::new(
                ["padding", ".info-box"],
                "Versuch es mal mit 'padding' auf der .info-box.",
            ),
        )
        .with_rule(
            ScenarioId::new("3-broken-gallery"),
            Rule::new(
                ["display: flex", ".gallery"],
                "Die Galerie (.gallery) braucht ein anderes Display-Verhalten.",
            ),
        );
    (scenarios, rules)
}

fn option(id: &str, text: &str, is_correct: bool, feedback: &str) -> DiagnosisOption {
    DiagnosisOption {
        id: OptionId::new(id),
        text: text.to_string(),
        is_correct,
        feedback: feedback.to_string(),
    }
}

fn hint(title: &str, text: &str) -> Hint {
    Hint {
        title: title.to_string(),
        text: text.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

fn invisible_button() -> Scenario {
    let mut targets: TargetCssProperties = BTreeMap::new();
    targets.insert(
        ".cta-button".to_string(),
        BTreeMap::from([("background-color".to_string(), "#2563eb".to_string())]),
    );

    Scenario {
        id: ScenarioId::new("1-invisible-button"),
        title: "Der unsichtbare Button".to_string(),
        difficulty: Difficulty::Junior,
        briefing: Briefing {
            sender: "Lisa aus dem Design".to_string(),
            role: "Frontend Retter".to_string(),
            subject: "WICHTIG: Button unlesbar!".to_string(),
            message: "Hi,\n\nwir haben ein Problem mit dem \"Jetzt kaufen\" Button.\n\
Auf dem neuen hellgrauen Hintergrund ist die weiße Schrift kaum zu lesen. \
Es sieht aus, als wäre der Button \"leer\".\n\n\
Kannst du dem Button bitte wieder eine kräftige Farbe geben? Am besten unser Brand-Blue (#2563EB)."
                .to_string(),
            goals: strings(&[
                "Mache den Button sichtbar",
                "Nutze die richtige Hintergrundfarbe",
                "Sorge für genug Kontrast",
            ]),
        },
        diagnosis: Diagnosis {
            question: "Warum ist der Button nicht zu sehen?".to_string(),
            options: vec![
                option(
                    "opt1",
                    "Der Button ist opacity: 0",
                    false,
                    "Nein, er ist da, nur weiß auf weiß.",
                ),
                option(
                    "opt2",
                    "Fehlende Hintergrundfarbe (Kontrast)",
                    true,
                    "Korrekt! Weiße Schrift braucht dunklen Hintergrund.",
                ),
                option(
                    "opt3",
                    "Display ist none",
                    false,
                    "Dann wäre er gar nicht im DOM.",
                ),
            ],
        },
        solution: Solution {
            initial_html: r#"<div class="card">
  <h2>Unser Produkt</h2>
  <button class="cta-button">Jetzt kaufen</button>
</div>"#
                .to_string(),
            initial_css: r".card {
  padding: 20px;
  background: #e5e7eb; /* Hellgrau, damit man den weißen Button sieht */
  border: 1px solid #ddd;
  border-radius: 8px;
  font-family: sans-serif;
  text-align: center;
}

.cta-button {
  /* PROBLEM: Weiße Schrift auf (fast) weißem Grund? */
  color: white;
  border: none;
  padding: 12px 24px;
  font-size: 16px;
  border-radius: 4px;
  cursor: pointer;
}"
            .to_string(),
            required_selectors: strings(&[".cta-button"]),
            target_css_properties: targets,
            explanation: "Buttons brauchen einen hohen Kontrast. Weiße Schrift auf weißem Grund ist \
ein klassischer Fehler. Mit `background-color` beheben wir das."
                .to_string(),
        },
        hints: vec![
            hint(
                "Level 1: Google Suche",
                "Suche nach \"css button background contrast\"",
            ),
            hint(
                "Level 2: KI-Prompt",
                "Frag eine KI: \"Warum ist weiße Schrift auf hellgrauem Grund schlecht und wie fix ich das mit CSS?\"",
            ),
            hint(
                "Level 3: Spezifischer KI-Prompt",
                "Frag: \"Welche CSS Property ändert die Hintergrundfarbe eines Buttons? Gib mir ein Beispiel für Blau.\"",
            ),
        ],
    }
}

fn sticky_text() -> Scenario {
    Scenario {
        id: ScenarioId::new("2-sticky-text"),
        title: "Der Klebe-Text".to_string(),
        difficulty: Difficulty::Junior,
        briefing: Briefing {
            sender: "Mark (Content)".to_string(),
            role: "Layout Polierer".to_string(),
            subject: "Box sieht \"kaputt\" aus".to_string(),
            message: "Moin,\n\nschau dir mal die Info-Box an. Der Text klebt förmlich am Rand. \
Das sieht extrem unprofessionell aus.\n\
Der Kunde fragt, ob wir da \"mehr Luft\" reinmachen können.\n\nVG, Mark"
                .to_string(),
            goals: strings(&[
                "Füge Innenabstand (Padding) hinzu",
                "Der Text darf den Rand nicht berühren",
            ]),
        },
        diagnosis: Diagnosis {
            question: "Welche Eigenschaft sorgt für \"Luft\" innerhalb einer Box?".to_string(),
            options: vec![
                option(
                    "opt1",
                    "margin",
                    false,
                    "Margin ist der Außenabstand ZWISCHEN Boxen.",
                ),
                option(
                    "opt2",
                    "padding",
                    true,
                    "Richtig! Padding ist der Innenabstand.",
                ),
                option("opt3", "border", false, "Border ist der Rahmen selbst."),
            ],
        },
        solution: Solution {
            initial_html: r#"<div class="info-box">
  Dies ist ein wichtiger Hinweis, der leider viel zu nah am Rand klebt. Das ist schlecht für die Lesbarkeit.
</div>"#
                .to_string(),
            initial_css: r".info-box {
  background: #fef3c7;
  border: 1px solid #f59e0b;
  color: #92400e;
  border-radius: 6px;
  /* HIER FEHLT PLATZ */
}"
            .to_string(),
            required_selectors: strings(&[".info-box"]),
            target_css_properties: TargetCssProperties::new(),
            explanation: "`padding` definiert den Abstand zwischen dem Inhalt und dem Rand (Border). \
Ohne Padding wirkt Text oft eingequetscht."
                .to_string(),
        },
        hints: vec![
            hint(
                "Level 1: Google Suche",
                "Suche nach \"css abstand innerhalb vs außerhalb\"",
            ),
            hint(
                "Level 2: KI-Prompt",
                "Frag eine KI: \"Was ist der Unterschied zwischen margin und padding in CSS? Was nehme ich, um Text mehr Platz IM Container zu geben?\"",
            ),
            hint(
                "Level 3: Spezifischer KI-Prompt",
                "Frag: \"Wie füge ich 20 Pixel Innenabstand zu einer Box mit der Klasse .info-box hinzu?\"",
            ),
        ],
    }
}

fn broken_gallery() -> Scenario {
    Scenario {
        id: ScenarioId::new("3-broken-gallery"),
        title: "Die kaputte Galerie".to_string(),
        difficulty: Difficulty::Mid,
        briefing: Briefing {
            sender: "Tim (Dev Team)".to_string(),
            role: "Flexbox Expert".to_string(),
            subject: "Galerie stapelt sich :(".to_string(),
            message: "Hey,\n\nich wollte eine Bildergalerie bauen, aber irgendwie sind die Bilder \
alle untereinander statt nebeneinander.\n\
Ich habe `display: block` auf dem Container, aber das war wohl falsch oder?\n\n\
Kannst du das fixen, damit sie schön in einer Reihe stehen?"
                .to_string(),
            goals: strings(&["Ordne die Bilder nebeneinander an", "Nutze Flexbox"]),
        },
        diagnosis: Diagnosis {
            question: "Wie ordnet man Elemente am besten nebeneinander an?".to_string(),
            options: vec![
                option(
                    "opt1",
                    "display: flex",
                    true,
                    "Genau! Flexbox ist perfekt für eindimensionale Layouts.",
                ),
                option(
                    "opt2",
                    "float: left",
                    false,
                    "Das haben wir 2010 gemacht. Heute nutzen wir Flexbox.",
                ),
                option(
                    "opt3",
                    "position: absolute",
                    false,
                    "Zu unflexibel für eine Galerie.",
                ),
            ],
        },
        solution: Solution {
            initial_html: r#"<div class="gallery">
  <div class="img-box">IMG 1</div>
  <div class="img-box">IMG 2</div>
  <div class="img-box">IMG 3</div>
</div>"#
                .to_string(),
            initial_css: r".gallery {
  /* HIER MUSS WAS GEÄNDERT WERDEN */
  display: block; 
  gap: 10px;
}

.img-box {
  width: 100px;
  height: 100px;
  background: #ddd;
  display: flex; /* Nur zum zentrieren des Textes */
  align-items: center;
  justify-content: center;
}"
            .to_string(),
            required_selectors: strings(&[".gallery"]),
            target_css_properties: TargetCssProperties::new(),
            explanation: "`display: flex` auf dem Elternelement sorgt dafür, dass die Kinder \
(Flex-Items) standardmäßig nebeneinander (in einer Zeile) angeordnet werden."
                .to_string(),
        },
        hints: vec![
            hint(
                "Level 1: Google Suche",
                "Suche nach \"css elemente nebeneinander flexbox\"",
            ),
            hint(
                "Level 2: KI-Prompt",
                "Frag eine KI: \"Wie kriege ich mit CSS div-Elemente nebeneinander? Erkläre mir, was display: flex macht.\"",
            ),
            hint(
                "Level 3: Spezifischer KI-Prompt",
                "Frag: \"Gib mir den CSS Code, um Elemente in einem Container (.gallery) horizontal anzuordnen.\"",
            ),
        ],
    }
}
