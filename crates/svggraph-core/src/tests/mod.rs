
pub(crate) fn points_svg(xs: &[f64]) -> String {
    let mut circles =
        String::from(r#"<circle class="svg-point-highlight" cx="-10" cy="-10" r="4"/>"#);
    for (i, x) in xs.iter().enumerate() {
        circles.push_str(&format!(
            r#"<circle cx="{x}" cy="{}" r="3" label="v{i}"/>"#,
            100.0 - *x
        ));
    }
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg"><g data-set="points" data-metric="cpu" data-color="#00AA00">{circles}</g></svg>"##
    )
}
