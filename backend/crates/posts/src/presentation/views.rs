//! Inline HTML views for the post pages
//!
//! Pages are small enough that a template engine would be overhead; the
//! markup lives next to the handlers that serve it.

use auth::CurrentUser;
use platform::html::escape;

use crate::domain::entity::PostWithAuthor;

fn nav(user: Option<&CurrentUser>) -> String {
    match user {
        Some(user) => format!(
            r#"<nav><a href="/posts">Posts</a> | <a href="/posts/new">New Post</a> | {} <form method="post" action="/logout" class="inline"><button type="submit">Log out</button></form></nav>"#,
            escape(&user.user_name),
        ),
        None => r#"<nav><a href="/posts">Posts</a> | <a href="/login">Log in</a> | <a href="/register">Register</a></nav>"#.to_string(),
    }
}

fn page(title: &str, user: Option<&CurrentUser>, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} - Mini Blog</title>
</head>
<body>
{nav}
{body}
</body>
</html>"#,
        title = escape(title),
        nav = nav(user),
        body = body,
    )
}

/// Post listing, with the drained flash message when one was set
pub fn index_page(
    posts: &[PostWithAuthor],
    user: Option<&CurrentUser>,
    flash: Option<&str>,
) -> String {
    let mut body = String::new();

    if let Some(message) = flash {
        body.push_str(&format!(
            r#"<p class="flash">{}</p>
"#,
            escape(message)
        ));
    }

    body.push_str("<h1>Posts</h1>\n<ul>\n");
    for post in posts {
        body.push_str(&format!(
            r#"<li><a href="/posts/{id}">{title}</a> by {author} on {created}</li>
"#,
            id = post.post.post_id,
            title = escape(&post.post.title),
            author = escape(&post.author_name),
            created = post.post.created_at.format("%Y-%m-%d %H:%M"),
        ));
    }
    body.push_str("</ul>");

    page("Posts", user, &body)
}

/// Single post detail
pub fn show_page(post: &PostWithAuthor, user: Option<&CurrentUser>) -> String {
    let is_owner = user.is_some_and(|u| u.user_id == post.post.author_id);

    let mut body = format!(
        r#"<h1>{title}</h1>
<p class="meta">by {author} on {created}</p>
<div class="body">{body}</div>"#,
        title = escape(&post.post.title),
        author = escape(&post.author_name),
        created = post.post.created_at.format("%Y-%m-%d %H:%M"),
        body = escape(&post.post.body),
    );

    if let Some(updated) = post.post.updated_at {
        body.push_str(&format!(
            r#"
<p class="meta">edited {}</p>"#,
            updated.format("%Y-%m-%d %H:%M")
        ));
    }

    if is_owner {
        body.push_str(&format!(
            r#"
<p><a href="/posts/{id}/edit">Edit</a></p>
<form method="post" action="/posts/{id}?_method=DELETE"><button type="submit">Delete</button></form>"#,
            id = post.post.post_id,
        ));
    }

    page(&post.post.title, user, &body)
}

/// New post form, optionally with an error banner
pub fn new_page(user: &CurrentUser, error: Option<&str>) -> String {
    let error_banner = match error {
        Some(message) => format!(r#"<p class="error">{}</p>
"#, escape(message)),
        None => String::new(),
    };

    let body = format!(
        r#"{error_banner}<h1>New Post</h1>
<form method="post" action="/posts">
<label>Title <input type="text" name="title"></label>
<label>Body <textarea name="body"></textarea></label>
<button type="submit">Create</button>
</form>"#,
    );

    page("New Post", Some(user), &body)
}

/// Edit form pre-filled with the current values
pub fn edit_page(post: &PostWithAuthor, user: &CurrentUser) -> String {
    let body = format!(
        r#"<h1>Edit Post</h1>
<form method="post" action="/posts/{id}?_method=PUT">
<label>Title <input type="text" name="title" value="{title}"></label>
<label>Body <textarea name="body">{post_body}</textarea></label>
<button type="submit">Save</button>
</form>"#,
        id = post.post.post_id,
        title = escape(&post.post.title),
        post_body = escape(&post.post.body),
    );

    page("Edit Post", Some(user), &body)
}
