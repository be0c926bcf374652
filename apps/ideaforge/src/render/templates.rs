/// Landing page. Replace: {title}, {subtitle}, {bullets_html}, {price_anchor}, {cta_text}
pub const LANDING_PAGE_TEMPLATE: &str = r##"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8"/>
  <meta name="viewport" content="width=device-width,initial-scale=1"/>
  <title>{title}</title>
  <style>
    body { background:#0b0b0b;color:#eef;padding:24px;font-family:Inter,system-ui,Arial,Helvetica,sans-serif; }
    .card { max-width:900px;margin:24px auto;padding:28px;border-radius:12px;background:#0f1720;box-shadow:0 10px 30px rgba(0,0,0,0.6); }
    h1{font-size:32px;margin:0 0 8px} h2{font-size:18px;color:#9aa} ul{line-height:1.6} .cta{display:inline-block;margin-top:18px;padding:12px 20px;border-radius:8px;background:#0ea5a4;color:#021;text-decoration:none;font-weight:700}
    footer{margin-top:28px;font-size:12px;color:#666}
  </style>
</head>
<body>
  <div class="card">
    <h1>{title}</h1>
    <h2>{subtitle}</h2>
    <ul>
{bullets_html}    </ul>
    <p><strong>Pricing:</strong> {price_anchor}</p>
    <a class="cta" href="#signup">{cta_text}</a>
    <footer>Faceless service — automated &amp; delivered via AI workflows.</footer>
  </div>
</body>
</html>
"##;

/// Master index for per-idea runs. Replace: {idea_count}, {items_html}
pub const INDEX_PAGE_TEMPLATE: &str = r##"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8"/>
  <title>All AI Ideas</title>
</head>
<body style="background:#111;color:#eef;font-family:sans-serif;padding:24px;">
  <h1>All {idea_count} AI-generated Faceless SaaS Ideas</h1>
  <ul>
{items_html}  </ul>
  <p>Open each link to preview the landing page.</p>
</body>
</html>
"##;
