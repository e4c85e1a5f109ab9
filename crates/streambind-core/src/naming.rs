//! Naming convention utilities for Java code generation.
//!
//! Channel names, queue names and schema identities arrive in whatever form
//! the document author chose (`orders/{id}/status`, `NEW_ORDERS`,
//! `order-placed`). These helpers split them into words and rebuild them as
//! Java identifiers.
//!
//! # Supported Conversions
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `orders/new` | [`to_camel_case`] | `ordersNew` |
//! | `order-placed` | [`to_pascal_case`] | `OrderPlaced` |
//! | `word` | [`capitalize`] | `Word` |

/// Split an identifier into lowercase-insensitive words.
///
/// Any non-alphanumeric character separates words, as does a lowercase to
/// uppercase transition (`orderId`) and the end of an acronym (`XMLParser`).
///
/// # Examples
///
/// ```
/// use streambind_core::naming::words;
///
/// assert_eq!(words("orders/{orderId}"), vec!["orders", "order", "Id"]);
/// assert_eq!(words("NEW_ORDERS"), vec!["NEW", "ORDERS"]);
/// ```
pub fn words(s: &str) -> Vec<String> {
    let mut result = Vec::new();

    for chunk in s.split(|c: char| !c.is_alphanumeric()) {
        let chars: Vec<char> = chunk.chars().collect();
        let mut current = String::new();

        for (i, &c) in chars.iter().enumerate() {
            if i > 0 && c.is_uppercase() {
                let prev = chars[i - 1];
                let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
                if !prev.is_uppercase() || next_is_lower {
                    result.push(std::mem::take(&mut current));
                }
            }
            current.push(c);
        }

        if !current.is_empty() {
            result.push(current);
        }
    }

    result
}

/// Convert an arbitrary identifier to camelCase.
///
/// # Examples
///
/// ```
/// use streambind_core::naming::to_camel_case;
///
/// assert_eq!(to_camel_case("orders/new"), "ordersNew");
/// assert_eq!(to_camel_case("NEW_ORDERS"), "newOrders");
/// assert_eq!(to_camel_case("already"), "already");
/// ```
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::new();

    for (i, word) in words(s).iter().enumerate() {
        let lower = word.to_lowercase();
        if i == 0 {
            result.push_str(&lower);
        } else {
            result.push_str(&capitalize(&lower));
        }
    }

    result
}

/// Convert an arbitrary identifier to PascalCase.
///
/// # Examples
///
/// ```
/// use streambind_core::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("order_status"), "OrderStatus");
/// assert_eq!(to_pascal_case("order-placed"), "OrderPlaced");
/// assert_eq!(to_pascal_case("hello"), "Hello");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    capitalize(&to_camel_case(s))
}

/// Capitalize the first letter of a string.
///
/// # Examples
///
/// ```
/// use streambind_core::naming::capitalize;
///
/// assert_eq!(capitalize("hello"), "Hello");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}
