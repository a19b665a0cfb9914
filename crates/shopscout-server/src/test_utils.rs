//! Shared fixtures for unit and HTTP tests.

/// Trimmed-down Amazon results page.
///
/// Four result containers: a complete listing, one without price or
/// availability, one without a rating, and a sponsored widget without a
/// title. Only the first two should be extracted.
pub const RESULTS_PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
<div class="s-main-slot s-result-list">
  <div class="s-result-item s-asin" data-asin="B00XMD7KPU">
    <h2 class="a-size-mini"><a class="a-link-normal" href="/dp/B00XMD7KPU">
      <span class="a-size-medium a-color-base a-text-normal">
        Anker 4-Port USB 3.0 Hub
      </span>
    </a></h2>
    <i class="a-icon a-icon-star-small"><span class="a-icon-alt">4.7 out of 5 stars</span></i>
    <span class="a-price"><span class="a-offscreen">$19.99</span><span aria-hidden="true">$19<span class="a-price-fraction">99</span></span></span>
    <div class="a-size-small"><span class="a-color-success">In Stock</span></div>
  </div>
  <div class="s-result-item s-asin" data-asin="B0C1GENRIC">
    <h2><a href="/dp/B0C1GENRIC"><span class="a-text-normal">Generic USB-C Hub</span></a></h2>
    <i class="a-icon a-icon-star-small"><span class="a-icon-alt"> 3.9 out of 5 stars </span></i>
  </div>
  <div class="s-result-item s-asin" data-asin="B0NORATING">
    <h2><a href="/dp/B0NORATING"><span class="a-text-normal">Brand New Hub</span></a></h2>
    <span class="a-price"><span class="a-offscreen">$9.49</span></span>
  </div>
  <div class="s-result-item s-widget">
    <span class="a-size-base">Sponsored</span>
  </div>
</div>
</body>
</html>"#;
