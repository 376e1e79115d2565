//! Conventions mapping route defaults to type names.
//!
//! Routes carry controller paths such as `api/v1/posts`; the hierarchy and
//! presenter registries are keyed by type names such as
//! `Api::V1::PostsController` and `Post`.

pub const MODULE_SEPARATOR: &str = "::";
pub const CONTROLLER_SUFFIX: &str = "Controller";

/// `api/v1/blog_posts` -> `Api::V1::BlogPostsController`
pub fn controller_type(controller_path: &str) -> String {
    let segments: Vec<String> = controller_path
        .split('/')
        .filter(|s| !s.is_empty())
        .map(camelize)
        .collect();
    format!("{}{}", segments.join(MODULE_SEPARATOR), CONTROLLER_SUFFIX)
}

/// `Api::V1::BlogPostsController` -> `BlogPost`
pub fn resource_type(controller_type: &str) -> String {
    let base = controller_type
        .rsplit(MODULE_SEPARATOR)
        .next()
        .unwrap_or(controller_type);
    let base = base.strip_suffix(CONTROLLER_SUFFIX).unwrap_or(base);
    singularize(base)
}

/// `blog_posts` -> `BlogPosts`
pub fn camelize(segment: &str) -> String {
    segment
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Naive English singular for the last word of a camel-cased name.
pub fn singularize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies") {
        if !stem.is_empty() {
            return format!("{stem}y");
        }
    }
    for suffix in ["sses", "xes", "ches", "shes", "zzes"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return word.to_string();
    }
    match word.strip_suffix('s') {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => word.to_string(),
    }
}
