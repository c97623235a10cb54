//! Built-in templates. Names end in `.md`/`.txt` so Tera does not HTML-escape.

pub const TOOLS: (&str, &str) = (
    "tools.txt",
    "{% for t in tools %}{{ t.id }} - {{ t.title }}\n    {{ t.summary }}\n{% endfor %}",
);

pub const EXTRACTION: (&str, &str) = (
    "extraction.md",
    r#"{{ notice }}
{%- if matches | length > 0 %}

| Detected Drug | Related Disease / Indication |
|---|---|
{%- for m in matches %}
| {{ m.drug }} | {{ m.indication }} |
{%- endfor %}
{%- endif %}
"#,
);

pub const DRUG_TABLE: (&str, &str) = (
    "drugs.md",
    r#"| Drug | Class | Indication |
|---|---|---|
{%- for d in drugs %}
| {{ d.name }} | {{ d.class }} | {{ d.indication }} |
{%- endfor %}
"#,
);

pub const SCORE: (&str, &str) = (
    "score.md",
    r#"{{ instrument_name }} score: {{ total }} / {{ max_total }}
Estimated mortality: {{ mortality }}

| Organ System | Criterion | Points |
|---|---|---|
{%- for s in breakdown %}
| {{ s.system_name }} | {{ s.label }} | {{ s.points }} |
{%- endfor %}
"#,
);

pub const CRITERIA: (&str, &str) = (
    "criteria.txt",
    r#"{{ name }} criteria
{%- for system in systems %}

{{ system.name }} - {{ system.measure }} (id: {{ system.id }})
{%- for o in system.options %}
  {{ o.points }}  {{ o.id }}: {{ o.label }}
{%- endfor %}
{%- endfor %}
"#,
);

pub const ELAPSED: (&str, &str) = (
    "elapsed.txt",
    r#"From {{ start }} to {{ end }}
Elapsed: {{ elapsed }}
Total: {{ total_minutes }} minutes ({{ total_hours }} hours, {{ total_seconds }} seconds)
"#,
);
