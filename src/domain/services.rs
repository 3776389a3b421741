//! The compiled-in service catalog.
//!
//! Builders mirror the public bmobot.ai API shapes: an empty positional
//! argument or flag counts as missing wherever a default is supplied, and
//! absent optional values are left out of the query or body entirely.

use serde_json::Value;

use super::error::DispatchError;
use super::registry::{ActionDef, Body, Call, Query, ServiceDef, float, int, parse_json};

type Built = Result<Value, DispatchError>;

/// Every service in display order.
pub fn catalog() -> Vec<ServiceDef> {
    vec![
        hash(),
        uuid(),
        json(),
        qr(),
        password(),
        cron(),
        text(),
        color(),
        regex(),
        jwt(),
        semver(),
        csv(),
        email(),
        encode(),
        ip(),
        time(),
        md(),
        yaml(),
        diff(),
        sql(),
        status(),
        ascii(),
        lorem(),
        glob(),
        convert(),
        faker(),
        meta(),
        ua(),
    ]
}

fn direction(c: &Call<'_>) -> &'static str {
    if c.switch("decode") { "decode" } else { "encode" }
}

fn hash() -> ServiceDef {
    fn digest(c: &Call<'_>, algorithm: &str) -> Built {
        Body::new()
            .opt("input", c.arg(0))
            .set("algorithm", algorithm)
            .done()
    }

    ServiceDef::new(
        "hash",
        "Hashing, HMAC, encoding, UUIDs, random strings",
        vec![
            ActionDef::body("sha256", "/hash", "SHA-256 hash", |c| digest(c, "sha256")),
            ActionDef::body("sha512", "/hash", "SHA-512 hash", |c| digest(c, "sha512")),
            ActionDef::body("md5", "/hash", "MD5 hash", |c| digest(c, "md5")),
            ActionDef::body("hmac", "/hmac", "HMAC signature", |c| {
                Body::new()
                    .opt("input", c.arg(0))
                    .opt("key", c.arg(1))
                    .set("algorithm", c.arg_or(2, "sha256"))
                    .done()
            }),
            ActionDef::body("encode", "/encode", "Base64/hex/URL encode", |c| {
                Body::new()
                    .opt("input", c.arg(0))
                    .set("encoding", c.flag_or("encoding", "base64"))
                    .set("action", direction(c))
                    .done()
            }),
            ActionDef::get("uuid", "/uuid", "Generate UUID v4"),
            ActionDef::body("random", "/random", "Random string", |c| {
                Body::new()
                    .set("length", int(c.arg_or(0, "32")))
                    .set("charset", c.flag_or("charset", "alphanumeric"))
                    .done()
            }),
        ],
    )
}

fn uuid() -> ServiceDef {
    ServiceDef::new(
        "uuid",
        "UUID/ULID generation, decoding, validation",
        vec![
            ActionDef::body("v4", "/generate", "Generate UUID v4", |_| {
                Body::new().set("version", "v4").done()
            }),
            ActionDef::body("v7", "/generate", "Generate UUID v7", |_| {
                Body::new().set("version", "v7").done()
            }),
            ActionDef::post("ulid", "/ulid", "Generate ULID"),
            ActionDef::body("decode", "/decode", "Decode UUID", |c| {
                Body::new().opt("uuid", c.arg(0)).done()
            }),
            ActionDef::body("validate", "/validate", "Validate UUID", |c| {
                Body::new().opt("uuid", c.arg(0)).done()
            }),
            ActionDef::body("batch", "/batch", "Batch generate", |c| {
                Body::new()
                    .set("count", int(c.arg_or(0, "5")))
                    .set("version", c.arg_or(1, "v4"))
                    .done()
            }),
        ],
    )
}

fn json() -> ServiceDef {
    fn document(c: &Call<'_>) -> Built {
        Body::new().set("json", c.input(0)?).done()
    }

    ServiceDef::new(
        "json",
        "Format, minify, validate, diff, flatten, query JSON",
        vec![
            ActionDef::body("format", "/format", "Pretty-print JSON", |c| {
                Body::new()
                    .set("json", c.input(0)?)
                    .set("indent", int(c.flag_or("indent", "2")))
                    .done()
            }),
            ActionDef::body("minify", "/minify", "Minify JSON", document),
            ActionDef::body("validate", "/validate", "Validate JSON", document),
            ActionDef::body("diff", "/diff", "Diff two JSON docs", |c| {
                Body::new()
                    .set("a", c.input(0)?)
                    .set("b", c.input(1)?)
                    .done()
            }),
            ActionDef::body("flatten", "/flatten", "Flatten nested JSON", document),
            ActionDef::body("query", "/query", "Query with path expr", |c| {
                Body::new()
                    .set("json", c.input(0)?)
                    .opt("path", c.arg(1))
                    .done()
            }),
            ActionDef::body("stats", "/stats", "JSON structure stats", document),
            ActionDef::body("merge", "/merge", "Deep merge JSON docs", |c| {
                Body::new().set("sources", c.inputs()?).done()
            }),
        ],
    )
}

fn qr() -> ServiceDef {
    ServiceDef::new(
        "qr",
        "Generate QR codes (PNG, SVG, base64, terminal)",
        vec![ActionDef::body(
            "generate",
            "/generate",
            "Generate QR code",
            |c| {
                Body::new()
                    .opt("text", c.arg(0))
                    .set("format", c.flag_or("format", "terminal"))
                    .set("size", int(c.flag_or("size", "256")))
                    .opt("fg", c.flag("fg"))
                    .opt("bg", c.flag("bg"))
                    .opt("errorCorrection", c.flag("ec"))
                    .done()
            },
        )],
    )
    .with_default("generate")
}

fn password() -> ServiceDef {
    ServiceDef::new(
        "password",
        "Generate passwords, passphrases, PINs, check strength",
        vec![
            ActionDef::query("generate", "/password", "Generate password", |c| {
                Query::new()
                    .set("length", c.flag_or("length", "20"))
                    .opt("uppercase", c.flag("upper"))
                    .opt("lowercase", c.flag("lower"))
                    .opt("numbers", c.flag("numbers"))
                    .opt("symbols", c.flag("symbols"))
            }),
            ActionDef::query("passphrase", "/passphrase", "Generate passphrase", |c| {
                Query::new()
                    .set("words", c.flag_or("words", "4"))
                    .set("separator", c.flag_or("sep", "-"))
            }),
            ActionDef::query("pin", "/pin", "Generate PIN", |c| {
                Query::new().set("length", c.flag_or("length", "6"))
            }),
            ActionDef::body("strength", "/strength", "Check strength", |c| {
                Body::new().opt("password", c.arg(0)).done()
            }),
            ActionDef::body("batch", "/batch", "Batch generate", |c| {
                Body::new()
                    .set("count", int(c.arg_or(0, "5")))
                    .set("length", int(c.flag_or("length", "16")))
                    .done()
            }),
        ],
    )
    .with_default("generate")
}

fn cron() -> ServiceDef {
    fn expression(c: &Call<'_>) -> Query {
        Query::new().opt("expression", c.arg(0))
    }

    ServiceDef::new(
        "cron",
        "Parse cron expressions, show next runs, presets",
        vec![
            ActionDef::query("parse", "/parse", "Parse cron expression", expression),
            ActionDef::query("next", "/next", "Next N run times", |c| {
                expression(c).set("count", c.flag_or("count", "5"))
            }),
            ActionDef::query("validate", "/validate", "Validate expression", expression),
            ActionDef::get("presets", "/presets", "Common cron presets"),
        ],
    )
    .with_default("parse")
}

fn text() -> ServiceDef {
    ServiceDef::new(
        "text",
        "Case conversion, slug, count, extract, lorem, encode",
        vec![
            ActionDef::body("case", "/case", "Convert case", |c| {
                let to = c
                    .flag("to")
                    .filter(|v| !v.is_empty())
                    .unwrap_or_else(|| c.arg_or(1, "camel"));
                Body::new().set("text", c.input(0)?).set("to", to).done()
            }),
            ActionDef::body("slug", "/slug", "Generate URL slug", |c| {
                Body::new().set("text", c.joined()).done()
            }),
            ActionDef::body("count", "/count", "Word/char count", |c| {
                Body::new().set("text", c.input(0)?).done()
            }),
            ActionDef::body("extract", "/extract", "Extract emails/URLs/etc", |c| {
                Body::new()
                    .set("text", c.input(0)?)
                    .set("type", c.flag_or("type", "emails"))
                    .done()
            }),
            ActionDef::body("lorem", "/lorem", "Generate lorem ipsum", |c| {
                Body::new()
                    .set("type", c.arg_or(0, "paragraphs"))
                    .set("count", int(c.flag_or("count", "3")))
                    .done()
            }),
            ActionDef::body("reverse", "/reverse", "Reverse text", |c| {
                Body::new()
                    .set("text", c.input(0)?)
                    .set("mode", c.flag_or("mode", "characters"))
                    .done()
            }),
        ],
    )
}

fn color() -> ServiceDef {
    fn single(c: &Call<'_>) -> Query {
        Query::new().opt("color", c.arg(0))
    }

    ServiceDef::new(
        "color",
        "Convert, palette, contrast, mix, name colors",
        vec![
            ActionDef::query("convert", "/convert", "Convert color formats", single),
            ActionDef::query("palette", "/palette", "Generate palette", |c| {
                single(c)
                    .set("type", c.flag_or("type", "complementary"))
                    .opt("count", c.flag("count"))
            }),
            ActionDef::query("contrast", "/contrast", "WCAG contrast ratio", |c| {
                Query::new()
                    .opt("foreground", c.arg(0))
                    .set("background", c.arg_or(1, "#ffffff"))
            }),
            ActionDef::query("mix", "/mix", "Mix two colors", |c| {
                Query::new()
                    .opt("color1", c.arg(0))
                    .opt("color2", c.arg(1))
                    .opt("weight", c.flag("weight"))
            }),
            ActionDef::get("random", "/random", "Random color"),
            ActionDef::query("name", "/name", "Name a color", single),
            ActionDef::query("shades", "/shades", "Generate shades", |c| {
                single(c).set("count", c.flag_or("count", "10"))
            }),
        ],
    )
}

fn regex() -> ServiceDef {
    fn pattern(c: &Call<'_>) -> Built {
        Body::new().opt("pattern", c.arg(0)).done()
    }

    ServiceDef::new(
        "regex",
        "Test, explain, replace, split, validate regex patterns",
        vec![
            ActionDef::body("test", "/test", "Test pattern", |c| {
                Body::new()
                    .opt("pattern", c.arg(0))
                    .set("text", c.input(1)?)
                    .set("flags", c.flag_or("flags", "g"))
                    .done()
            }),
            ActionDef::body("explain", "/explain", "Explain pattern in English", pattern),
            ActionDef::body("replace", "/replace", "Find & replace", |c| {
                Body::new()
                    .opt("pattern", c.arg(0))
                    .set("text", c.input(1)?)
                    .opt("replacement", c.arg(2))
                    .set("flags", c.flag_or("flags", "g"))
                    .done()
            }),
            ActionDef::body("validate", "/validate", "Validate pattern", pattern),
            ActionDef::get("library", "/library", "Common patterns library"),
        ],
    )
}

fn jwt() -> ServiceDef {
    ServiceDef::new(
        "jwt",
        "Decode, verify, generate, inspect JWT tokens",
        vec![
            ActionDef::body("decode", "/decode", "Decode JWT payload", |c| {
                Body::new().opt("token", c.arg(0)).done()
            }),
            ActionDef::body("verify", "/verify", "Verify JWT signature", |c| {
                Body::new()
                    .opt("token", c.arg(0))
                    .opt("secret", c.arg(1))
                    .done()
            }),
            ActionDef::body("generate", "/generate", "Generate JWT", |c| {
                Body::new()
                    .set("payload", parse_json(c.arg(0).unwrap_or_default())?)
                    .opt("secret", c.arg(1))
                    .set("algorithm", c.flag_or("alg", "HS256"))
                    .opt("expiresIn", c.flag("exp"))
                    .done()
            }),
            ActionDef::query("inspect", "/inspect", "Inspect JWT header", |c| {
                Query::new().opt("token", c.arg(0))
            }),
        ],
    )
}

fn semver() -> ServiceDef {
    ServiceDef::new(
        "semver",
        "Parse, compare, sort, bump semantic versions",
        vec![
            ActionDef::body("parse", "/parse", "Parse version string", |c| {
                Body::new().opt("version", c.arg(0)).done()
            }),
            ActionDef::body("compare", "/compare", "Compare two versions", |c| {
                Body::new().opt("a", c.arg(0)).opt("b", c.arg(1)).done()
            }),
            ActionDef::body("sort", "/sort", "Sort version list", |c| {
                Body::new().set("versions", c.args().to_vec()).done()
            }),
            ActionDef::body("satisfies", "/satisfies", "Check range match", |c| {
                Body::new()
                    .opt("version", c.arg(0))
                    .opt("range", c.arg(1))
                    .done()
            }),
            ActionDef::body("bump", "/bump", "Bump version", |c| {
                Body::new()
                    .opt("version", c.arg(0))
                    .set("type", c.arg_or(1, "patch"))
                    .opt("preid", c.flag("preid"))
                    .done()
            }),
        ],
    )
}

fn csv() -> ServiceDef {
    fn table(c: &Call<'_>) -> Built {
        Body::new().set("csv", c.input(0)?).done()
    }

    ServiceDef::new(
        "csv",
        "Convert CSV to/from JSON, stats, filter, sort",
        vec![
            ActionDef::body("to-json", "/to-json", "CSV to JSON", table),
            ActionDef::body("from-json", "/from-json", "JSON to CSV", |c| {
                Body::new().set("json", c.input(0)?).done()
            }),
            ActionDef::body("stats", "/stats", "CSV statistics", table),
            ActionDef::body("filter", "/filter", "Filter rows", |c| {
                Body::new()
                    .set("csv", c.input(0)?)
                    .opt("column", c.flag("column"))
                    .opt("value", c.flag("value"))
                    .opt("operator", c.flag("op"))
                    .done()
            }),
            ActionDef::body("sort", "/sort", "Sort by column", |c| {
                Body::new()
                    .set("csv", c.input(0)?)
                    .opt("column", c.flag("column"))
                    .set("direction", c.flag_or("dir", "asc"))
                    .done()
            }),
        ],
    )
}

fn email() -> ServiceDef {
    fn address(c: &Call<'_>) -> Query {
        Query::new().opt("email", c.arg(0))
    }

    ServiceDef::new(
        "email",
        "Validate email addresses, check MX, detect disposable",
        vec![
            ActionDef::query("validate", "/validate", "Full validation", address),
            ActionDef::query("syntax", "/syntax", "Syntax check only", address),
            ActionDef::query("mx", "/mx", "MX record lookup", address),
            ActionDef::query("disposable", "/disposable", "Disposable check", address),
            ActionDef::query("suggest", "/suggest", "Typo suggestion", address),
        ],
    )
}

fn encode() -> ServiceDef {
    fn codec(c: &Call<'_>) -> Built {
        Body::new()
            .opt("text", c.arg(0))
            .set("action", direction(c))
            .done()
    }

    ServiceDef::new(
        "encode",
        "Base32, base58, morse, braille, NATO, punycode",
        vec![
            ActionDef::body("base32", "/base32", "Base32 encode/decode", codec),
            ActionDef::body("base58", "/base58", "Base58 encode/decode", codec),
            ActionDef::body("morse", "/morse", "Morse code", codec),
            ActionDef::body("braille", "/braille", "Braille encoding", codec),
            ActionDef::body("nato", "/nato", "NATO phonetic alphabet", |c| {
                Body::new().opt("text", c.arg(0)).done()
            }),
            ActionDef::body("punycode", "/punycode", "Punycode", codec),
        ],
    )
}

fn ip() -> ServiceDef {
    fn address(c: &Call<'_>) -> Built {
        Body::new().opt("ip", c.arg(0)).done()
    }

    ServiceDef::new(
        "ip",
        "Validate IPs, CIDR calc, subnet, range check",
        vec![
            ActionDef::body("validate", "/validate", "Validate IP address", address),
            ActionDef::body("cidr", "/cidr", "CIDR calculator", |c| {
                Body::new().opt("cidr", c.arg(0)).done()
            }),
            ActionDef::body("subnet", "/subnet", "Subnet info", |c| {
                Body::new().opt("ip", c.arg(0)).opt("mask", c.arg(1)).done()
            }),
            ActionDef::body("range", "/range", "Check if IP in range", |c| {
                Body::new().opt("ip", c.arg(0)).opt("cidr", c.arg(1)).done()
            }),
            ActionDef::body("info", "/info", "IP info (type, class)", address),
        ],
    )
}

fn time() -> ServiceDef {
    ServiceDef::new(
        "time",
        "Current time, convert timezones, diff, add, calendar",
        vec![
            ActionDef::query("now", "/now", "Current time", |c| {
                Query::new().opt("timezone", c.arg(0))
            }),
            ActionDef::body("convert", "/convert", "Convert timezone", |c| {
                Body::new()
                    .opt("datetime", c.arg(0))
                    .opt("from", c.arg(1))
                    .opt("to", c.arg(2))
                    .done()
            }),
            ActionDef::body("diff", "/diff", "Time difference", |c| {
                Body::new()
                    .opt("start", c.arg(0))
                    .opt("end", c.arg(1))
                    .done()
            }),
            ActionDef::body("add", "/add", "Add time", |c| {
                Body::new()
                    .opt("datetime", c.arg(0))
                    .set("amount", int(c.arg(1).unwrap_or_default()))
                    .set("unit", c.arg_or(2, "days"))
                    .done()
            }),
            ActionDef::query("calendar", "/calendar", "Show calendar", |c| {
                Query::new().opt("year", c.arg(0)).opt("month", c.arg(1))
            }),
        ],
    )
    .with_default("now")
}

fn md() -> ServiceDef {
    fn markdown(c: &Call<'_>) -> Built {
        Body::new().set("markdown", c.input(0)?).done()
    }

    ServiceDef::new(
        "md",
        "Markdown to HTML, extract links/TOC, frontmatter, stats",
        vec![
            ActionDef::body("to-html", "/to-html", "Convert to HTML", markdown),
            ActionDef::body("toc", "/toc", "Extract TOC", markdown),
            ActionDef::body("links", "/links", "Extract links", markdown),
            ActionDef::body("frontmatter", "/frontmatter", "Parse frontmatter", markdown),
            ActionDef::body("stats", "/stats", "Document stats", markdown),
            ActionDef::body("format", "/format", "Auto-format", markdown),
        ],
    )
}

fn yaml() -> ServiceDef {
    fn document(c: &Call<'_>) -> Built {
        Body::new().set("yaml", c.input(0)?).done()
    }

    ServiceDef::new(
        "yaml",
        "YAML/TOML conversion, validation, formatting",
        vec![
            ActionDef::body("to-json", "/yaml/to-json", "YAML to JSON", document),
            ActionDef::body("from-json", "/json/to-yaml", "JSON to YAML", |c| {
                Body::new().set("json", c.input(0)?).done()
            }),
            ActionDef::body("validate", "/yaml/validate", "Validate YAML", document),
            ActionDef::body("format", "/yaml/format", "Format YAML", document),
            ActionDef::body("toml-to-json", "/toml/to-json", "TOML to JSON", |c| {
                Body::new().set("toml", c.input(0)?).done()
            }),
        ],
    )
}

fn diff() -> ServiceDef {
    fn pair(c: &Call<'_>) -> Built {
        Body::new()
            .set("a", c.input(0)?)
            .set("b", c.input(1)?)
            .done()
    }

    ServiceDef::new(
        "diff",
        "Unified diff, word diff, patch, three-way merge",
        vec![
            ActionDef::body("unified", "/unified", "Unified diff", pair),
            ActionDef::body("word", "/word", "Word-level diff", pair),
            ActionDef::body("char", "/char", "Character-level diff", pair),
            ActionDef::body("stats", "/stats", "Diff statistics", pair),
            ActionDef::body("patch", "/patch", "Apply patch", |c| {
                Body::new()
                    .set("text", c.input(0)?)
                    .set("patch", c.input(1)?)
                    .done()
            }),
            ActionDef::body("merge", "/merge", "Three-way merge", |c| {
                Body::new()
                    .set("base", c.input(0)?)
                    .set("ours", c.input(1)?)
                    .set("theirs", c.input(2)?)
                    .done()
            }),
        ],
    )
}

fn sql() -> ServiceDef {
    fn statement(c: &Call<'_>) -> Built {
        Body::new().set("sql", c.input(0)?).done()
    }

    ServiceDef::new(
        "sql",
        "Format, minify, validate, highlight SQL",
        vec![
            ActionDef::body("format", "/format", "Format SQL", |c| {
                Body::new()
                    .set("sql", c.input(0)?)
                    .opt("dialect", c.flag("dialect"))
                    .done()
            }),
            ActionDef::body("minify", "/minify", "Minify SQL", statement),
            ActionDef::body("validate", "/validate", "Validate SQL", statement),
            ActionDef::body("extract", "/extract", "Extract tables/columns", statement),
        ],
    )
}

fn status() -> ServiceDef {
    ServiceDef::new(
        "status",
        "HTTP status code lookup and search",
        vec![
            ActionDef::dynamic(
                "lookup",
                |c| format!("/status/{}", c.arg(0).unwrap_or_default()),
                "Look up status code",
            ),
            ActionDef::query("search", "/search", "Search codes", |c| {
                Query::new().set("q", c.joined())
            }),
            ActionDef::dynamic(
                "category",
                |c| format!("/category/{}", c.arg_or(0, "4xx")),
                "Browse by category",
            ),
            ActionDef::get("random", "/random", "Random status code"),
        ],
    )
    .with_default("lookup")
}

fn ascii() -> ServiceDef {
    ServiceDef::new(
        "ascii",
        "ASCII art text, boxes, tables, banners",
        vec![
            ActionDef::body("figlet", "/figlet", "Figlet text art", |c| {
                Body::new()
                    .set("text", c.joined())
                    .set("font", c.flag_or("font", "standard"))
                    .done()
            }),
            ActionDef::body("box", "/box", "Text in a box", |c| {
                Body::new()
                    .set("text", c.joined())
                    .set("style", c.flag_or("style", "round"))
                    .done()
            }),
            ActionDef::body("banner", "/banner", "Banner text", |c| {
                Body::new()
                    .set("text", c.joined())
                    .set("width", int(c.flag_or("width", "60")))
                    .done()
            }),
            ActionDef::body("table", "/table", "ASCII table", |c| {
                Body::new().set("data", c.json_input(0)?).done()
            }),
            ActionDef::body("tree", "/tree", "Tree diagram", |c| {
                Body::new().set("data", c.json_input(0)?).done()
            }),
        ],
    )
    .with_default("figlet")
}

fn lorem() -> ServiceDef {
    ServiceDef::new(
        "lorem",
        "Lorem ipsum and placeholder text generation",
        vec![
            ActionDef::query("paragraphs", "/paragraphs", "Generate paragraphs", |c| {
                Query::new().set("count", c.arg_or(0, "3"))
            }),
            ActionDef::query("sentences", "/sentences", "Generate sentences", |c| {
                Query::new().set("count", c.arg_or(0, "5"))
            }),
            ActionDef::query("words", "/words", "Generate words", |c| {
                Query::new().set("count", c.arg_or(0, "10"))
            }),
            ActionDef::query("lists", "/lists", "Generate lists", |c| {
                Query::new().set("items", c.arg_or(0, "5"))
            }),
        ],
    )
    .with_default("paragraphs")
}

fn glob() -> ServiceDef {
    fn pattern(c: &Call<'_>) -> Built {
        Body::new().opt("pattern", c.arg(0)).done()
    }

    ServiceDef::new(
        "glob",
        "Test, explain, generate glob patterns",
        vec![
            ActionDef::body("test", "/test", "Test paths against pattern", |c| {
                Body::new()
                    .opt("pattern", c.arg(0))
                    .set("paths", c.rest(1).to_vec())
                    .done()
            }),
            ActionDef::body("explain", "/explain", "Explain pattern", pattern),
            ActionDef::body("generate", "/generate", "Generate pattern from paths", |c| {
                Body::new().set("paths", c.args().to_vec()).done()
            }),
            ActionDef::body("validate", "/validate", "Validate pattern", pattern),
        ],
    )
}

fn convert() -> ServiceDef {
    fn measure(c: &Call<'_>) -> Built {
        Body::new()
            .set("value", float(c.arg(0).unwrap_or_default()))
            .opt("from", c.arg(1))
            .opt("to", c.arg(2))
            .done()
    }

    ServiceDef::new(
        "convert",
        "Number base, data size, length, weight, temperature",
        vec![
            ActionDef::body("number", "/number", "Number base conversion", |c| {
                Body::new()
                    .opt("value", c.arg(0))
                    .set("from", int(c.arg_or(1, "10")))
                    .set("to", int(c.arg_or(2, "16")))
                    .done()
            }),
            ActionDef::body("data", "/data-size", "Data size conversion", measure),
            ActionDef::body("length", "/length", "Length conversion", measure),
            ActionDef::body("weight", "/weight", "Weight conversion", measure),
            ActionDef::body("temp", "/temperature", "Temperature conversion", measure),
        ],
    )
}

fn faker() -> ServiceDef {
    fn count(c: &Call<'_>) -> Built {
        Body::new().set("count", int(c.flag_or("count", "1"))).done()
    }

    ServiceDef::new(
        "faker",
        "Generate realistic fake data for testing",
        vec![
            ActionDef::body("person", "/person", "Fake person", |c| {
                let seed = c.flag("seed").filter(|v| !v.is_empty()).map(int);
                Body::new()
                    .set("count", int(c.flag_or("count", "1")))
                    .opt("seed", seed)
                    .done()
            }),
            ActionDef::body("address", "/address", "Fake address", count),
            ActionDef::body("company", "/company", "Fake company", count),
            ActionDef::body("text", "/text", "Fake text", count),
            ActionDef::body("finance", "/finance", "Fake finance data", count),
        ],
    )
    .with_default("person")
}

fn meta() -> ServiceDef {
    ServiceDef::new(
        "meta",
        "Extract URL metadata (OG tags, favicons, etc)",
        vec![ActionDef::query(
            "fetch",
            "/meta",
            "Fetch URL metadata",
            |c| Query::new().opt("url", c.arg(0)),
        )],
    )
    .with_default("fetch")
}

fn ua() -> ServiceDef {
    ServiceDef::new(
        "ua",
        "Parse user agent strings",
        vec![
            ActionDef::body("parse", "/parse", "Parse user agent", |c| {
                Body::new()
                    .opt("ua", c.arg(0).filter(|v| !v.is_empty()))
                    .done()
            }),
            ActionDef::body("detect", "/detect", "Detect features", |c| {
                Body::new().opt("ua", c.arg(0)).done()
            }),
            ActionDef::get("library", "/library", "Common UAs library"),
        ],
    )
    .with_default("parse")
}
