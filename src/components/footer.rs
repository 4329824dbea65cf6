use chrono::{Datelike, Local};
use stylist::yew::styled_component;
use yew::prelude::*;

pub fn copyright(year: i32) -> String {
    format!("© {} Lambert Brothers Insurance. All rights reserved.", year)
}

#[styled_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class={css!(r#"
            background: #fff;
            color: #3d559a;
            font-weight: bold;
            font-size: 1.05em;
            padding: 20px 0;
            text-align: center;
        "#)}>
            <p>{copyright(year)}</p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_the_year() {
        assert_eq!(copyright(2025), "© 2025 Lambert Brothers Insurance. All rights reserved.");
    }
}
