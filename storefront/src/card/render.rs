use std::fmt::Write;

use super::{CardModel, CardView};

/// Render a card model as plain text for the terminal
pub fn render_card(model: &CardModel, width: usize) -> String {
    CardRenderer::new(model, width).render()
}

struct CardRenderer<'a> {
    model: &'a CardModel,
    width: usize,
}

impl<'a> CardRenderer<'a> {
    fn new(model: &'a CardModel, width: usize) -> Self {
        Self { model, width }
    }

    fn render(&self) -> String {
        let m = self.model;
        let mut out = String::new();

        self.sep(&mut out, '=');
        let mut title = format!("{} [{}]", m.name, m.product_id);
        if let Some(badge) = m.badge {
            let _ = write!(title, " ({})", badge);
        }
        if m.gmp_certified {
            title.push_str(" GMP");
        }
        let _ = writeln!(out, "{}", title);
        let _ = writeln!(out, "{} | {}", m.strain_type, m.stock_label);
        self.sep(&mut out, '-');

        match m.view {
            CardView::Image => {
                let _ = writeln!(out, "CBD {}   THC {}", m.cbd, m.thc);
                for attr in &m.attributes {
                    let _ = writeln!(out, "{} {}", attr.label, attr.value);
                }
            }
            CardView::Details => {
                if let Some(details) = &m.details {
                    let _ = writeln!(out, "תכולת קנבינואידים");
                    for c in &details.cannabinoids {
                        let _ = writeln!(out, "  {:<4} {}", c.label, c.value);
                    }
                    let _ = writeln!(out, "פרופיל טרפנים");
                    for t in &details.terpenes {
                        let _ = writeln!(
                            out,
                            "  {:<14} {:>5} {}",
                            t.name,
                            t.percentage,
                            bar(t.bar_width, 20)
                        );
                    }
                    let _ = writeln!(out, "מידע נוסף");
                    for row in &details.info {
                        let _ = writeln!(out, "  {} {}", row.label, row.value);
                    }
                }
            }
        }

        self.sep(&mut out, '-');
        for price in &m.prices {
            let _ = writeln!(out, "{}: {}", price.label, price.value);
        }
        if m.basket_quantity > 0 {
            let _ = writeln!(out, "בסל: {}", m.basket_quantity);
        }
        let button = if m.order_button.enabled {
            format!("[{}]", m.order_button.label)
        } else {
            format!("({})", m.order_button.label)
        };
        let _ = writeln!(out, "{}  <{}>", button, m.flip_label);
        self.sep(&mut out, '=');
        out
    }

    fn sep(&self, out: &mut String, c: char) {
        out.extend(std::iter::repeat_n(c, self.width));
        out.push('\n');
    }
}

/// Fixed-width bar filled to `width_percent` of `cells`
fn bar(width_percent: f64, cells: usize) -> String {
    let filled = ((width_percent / 100.0) * cells as f64).round() as usize;
    let filled = filled.min(cells);
    let mut s = "#".repeat(filled);
    s.push_str(&".".repeat(cells - filled));
    s
}
