use maud::DOCTYPE;
use maud::Markup;
use maud::html;

const APP_NAME: &str = "Task Manager";

/// Wraps page content in the document shell every HTML response shares.
pub fn page(title: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title {
                    @if let Some(title) = title {
                        (title) " | "
                    }
                    (APP_NAME)
                }
            }
            body {
                header {
                    a href="/" { (APP_NAME) }
                }
                main {
                    (content)
                }
            }
        }
    }
}
