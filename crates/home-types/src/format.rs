//! Display helpers shared by the listing and detail pages.

/// Rounds to whole units and groups thousands with spaces: `250 000`.
pub fn group_thousands(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{}", rounded.abs() as u64);

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

pub fn format_price(price: f64) -> String {
    format!("{} €", group_thousands(price))
}

pub fn format_surface(surface: f64) -> String {
    if surface.fract() == 0.0 {
        format!("{surface:.0} m²")
    } else {
        format!("{surface:.1} m²")
    }
}

/// `location - surface - price`, the card subtitle.
pub fn card_subtitle(location: &str, surface: f64, price: f64) -> String {
    format!(
        "{location} - {} - {}",
        format_surface(surface),
        format_price(price)
    )
}

pub fn bedrooms_label(bedrooms: u32) -> String {
    format!("{bedrooms} bedroom{}", if bedrooms > 1 { "s" } else { "" })
}

pub fn floor_label(floor: Option<i32>) -> String {
    match floor {
        Some(level) => format!("Floor {level}"),
        None => "Ground floor".into(),
    }
}

pub fn construction_year_label(year: Option<u32>) -> String {
    match year {
        Some(y) if y > 0 => y.to_string(),
        _ => "Unknown year".into(),
    }
}
