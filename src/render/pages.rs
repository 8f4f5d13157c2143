use super::escape_html;
use crate::error::Result;
use crate::models::{FilterMatch, Profile, SearchResult, MAX_MEMBER_OPTION};
use crate::state::Snapshot;
use std::fmt::Write;

/// Wrap `body` in the shared page chrome
fn layout(title: &str, body: &str) -> Result<String> {
    let mut page = String::with_capacity(body.len() + 512);
    write!(
        page,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
    <link rel="stylesheet" href="/style.css">
    <script src="/script.js" defer></script>
</head>
<body>
    <header>
        <a class="brand" href="/">Groupie Tracker</a>
        <form class="search" action="/search" method="get" autocomplete="off">
            <input type="text" name="s" placeholder="Artist, member, year, city..." oninput="showSuggestions(this.value)">
            <button type="submit">Search</button>
            <div id="suggestions"></div>
        </form>
    </header>
    <main>
{}
    </main>
</body>
</html>"#,
        escape_html(title),
        body
    )?;
    Ok(page)
}

fn artist_card(out: &mut String, id: u32, name: &str, image: &str) -> Result<()> {
    write!(
        out,
        r#"        <a class="card" href="/profil?id={}">
            <img src="{}" alt="{}">
            <span>{}</span>
        </a>
"#,
        id,
        escape_html(image),
        escape_html(name),
        escape_html(name)
    )?;
    Ok(())
}

fn filter_form(out: &mut String, locations: &[String]) -> Result<()> {
    out.push_str(
        r#"    <form class="filter" action="/filter" method="post">
        <fieldset>
            <legend>Creation date</legend>
            <input type="number" name="creation_date_min" placeholder="from">
            <input type="number" name="creation_date_max" placeholder="to">
        </fieldset>
        <fieldset>
            <legend>First album</legend>
            <input type="number" name="first_album_min" placeholder="from">
            <input type="number" name="first_album_max" placeholder="to">
        </fieldset>
        <fieldset>
            <legend>Members</legend>
"#,
    );

    for count in 1..=MAX_MEMBER_OPTION {
        writeln!(
            out,
            r#"            <label><input type="checkbox" name="num_members_{0}" value="on"> {0}</label>"#,
            count
        )?;
    }

    out.push_str(
        r#"        </fieldset>
        <fieldset>
            <legend>Location</legend>
            <select name="city">
                <option value="">any</option>
"#,
    );

    for location in locations {
        writeln!(
            out,
            r#"                <option value="{0}">{0}</option>"#,
            escape_html(location)
        )?;
    }

    out.push_str(
        r#"            </select>
        </fieldset>
        <button type="submit">Filter</button>
    </form>
"#,
    );
    Ok(())
}

/// Home page: filter form plus every artist of the snapshot
pub fn home_page(snapshot: &Snapshot, unique_locations: &[String]) -> Result<String> {
    let mut body = String::new();
    filter_form(&mut body, unique_locations)?;

    body.push_str("    <section class=\"grid\">\n");
    for artist in snapshot.artists() {
        artist_card(&mut body, artist.id, &artist.name, &artist.image)?;
    }
    body.push_str("    </section>");

    layout("Groupie Tracker", &body)
}

/// Search results page
pub fn search_page(query: &str, results: &[SearchResult]) -> Result<String> {
    let mut body = String::new();
    writeln!(
        body,
        "    <h1>Results for &quot;{}&quot;</h1>\n    <ul class=\"results\">",
        escape_html(query)
    )?;

    for result in results {
        writeln!(
            body,
            r#"        <li class="{}"><a href="/profil?id={}">{}{} <small>{}</small></a></li>"#,
            result.category,
            result.id,
            result
                .image
                .as_deref()
                .map(|image| format!(r#"<img src="{}" alt=""> "#, escape_html(image)))
                .unwrap_or_default(),
            escape_html(&result.name),
            escape_html(&result.qualifier)
        )?;
    }
    body.push_str("    </ul>");

    layout("Search", &body)
}

/// Artists kept by the filter
pub fn filter_page(matches: &[FilterMatch]) -> Result<String> {
    let mut body = String::from("    <h1>Filtered artists</h1>\n    <section class=\"grid\">\n");
    for artist in matches {
        artist_card(&mut body, artist.id, &artist.name, &artist.image)?;
    }
    body.push_str("    </section>");

    layout("Filter", &body)
}

/// Artist detail page
pub fn profile_page(profile: &Profile) -> Result<String> {
    let artist = &profile.artist;
    let mut body = String::new();

    write!(
        body,
        r#"    <article class="profile">
        <img src="{}" alt="{}">
        <h1>{}</h1>
        <p>Created in {} &middot; first album {}</p>
        <h2>Members</h2>
        <ul>
"#,
        escape_html(&artist.image),
        escape_html(&artist.name),
        escape_html(&artist.name),
        artist.creation_date,
        escape_html(&artist.first_album)
    )?;
    for member in &artist.members {
        writeln!(body, "            <li>{}</li>", escape_html(member))?;
    }

    body.push_str("        </ul>\n        <h2>Concerts</h2>\n        <table>\n");
    for (location, dates) in &profile.relation.dates_locations {
        let dates: Vec<String> = dates.iter().map(|d| escape_html(d)).collect();
        writeln!(
            body,
            "            <tr><td>{}</td><td>{}</td></tr>",
            escape_html(location),
            dates.join(", ")
        )?;
    }

    body.push_str("        </table>\n        <h2>Locations</h2>\n        <ul>\n");
    for location in &profile.locations.locations {
        writeln!(body, "            <li>{}</li>", escape_html(location))?;
    }

    body.push_str("        </ul>\n        <h2>Dates</h2>\n        <ul>\n");
    for date in &profile.dates.dates {
        writeln!(
            body,
            "            <li>{}</li>",
            escape_html(date.trim_start_matches('*'))
        )?;
    }
    body.push_str("        </ul>\n    </article>");

    layout(&artist.name, &body)
}

/// Shown when a search finds nothing
pub fn not_found_page() -> Result<String> {
    layout(
        "Not found",
        "    <section class=\"empty\">\n        <h1>Nothing found</h1>\n        <p><a href=\"/\">Back to all artists</a></p>\n    </section>",
    )
}

/// Error page carrying the status code
pub fn error_page(status: u16, message: &str) -> Result<String> {
    let mut body = String::new();
    write!(
        body,
        "    <section class=\"error\">\n        <h1>{}</h1>\n        <p>{}</p>\n        <p><a href=\"/\">Home</a></p>\n    </section>",
        status,
        escape_html(message)
    )?;
    layout(&format!("Error {}", status), &body)
}
