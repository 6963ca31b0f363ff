/// An internal link the reader may choose.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectedItem<'a> {
    pub label: &'a str,
    /// Target after base-URL resolution.
    pub href: &'a str,
    pub level: u16,
}

/// Item-selection notifier attached to internal links.
///
/// Markup is static, so the notifier is expressed as the script the host wants
/// to run on click (closing the mobile sidebar, analytics, ...). External
/// targets never receive it.
pub trait ItemSelect {
    /// Returns the `onclick` script for `item`.
    fn handler(&self, item: SelectedItem<'_>) -> String;
}

impl<F> ItemSelect for F
where
    F: Fn(SelectedItem<'_>) -> String,
{
    #[inline]
    fn handler(&self, item: SelectedItem<'_>) -> String {
        self(item)
    }
}

/// Calls a named global function with the item's href as its only argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallbackSelect {
    function: String,
}

impl CallbackSelect {
    pub fn new(function: impl Into<String>) -> Self {
        Self {
            function: function.into(),
        }
    }
}

impl ItemSelect for CallbackSelect {
    fn handler(&self, item: SelectedItem<'_>) -> String {
        let mut script = String::with_capacity(self.function.len() + item.href.len() + 4);
        script.push_str(&self.function);
        script.push_str("('");
        for c in item.href.chars() {
            match c {
                '\'' | '\\' => {
                    script.push('\\');
                    script.push(c);
                }
                _ => script.push(c),
            }
        }
        script.push_str("')");
        script
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callback_select_quotes_href() {
        let select = CallbackSelect::new("closeSidebar");
        let item = SelectedItem {
            label: "Intro",
            href: "/docs/it's",
            level: 1,
        };
        assert_eq!(select.handler(item), r"closeSidebar('/docs/it\'s')");
    }

    #[test]
    fn closures_build_handlers() {
        let select = |item: SelectedItem<'_>| format!("track({})", item.level);
        let item = SelectedItem {
            label: "Setup",
            href: "/setup",
            level: 2,
        };
        assert_eq!(select.handler(item), "track(2)");
    }
}
