//! Fixture documents shared by the unit tests

pub const GUIDE_PAGE: &str = r##"<!DOCTYPE html>
<html>
<head>
  <title>Platform Guide</title>
  <script src="/assets/js/prism.min.js"></script>
</head>
<body>
  <nav class="top-nav">
    <a href="#" class="nav-item active" data-section="overview">Overview</a>
    <a href="#" class="nav-item" data-section="gpu">GPU</a>
    <a href="#" class="nav-item" data-section="networking">Networking</a>
    <a href="#" class="nav-item" data-section="storage">Storage</a>
    <button id="navToggle" class="nav-toggle">Menu</button>
    <div id="navDropdown" class="nav-dropdown">
      <a href="#" class="nav-item active" data-section="overview">Overview</a>
      <a href="#" class="nav-item" data-section="gpu">GPU</a>
      <a href="#" class="nav-item" data-section="networking">Networking</a>
      <a href="#" class="nav-item" data-section="storage">Storage</a>
    </div>
    <div class="nav-progress-track"><div id="navProgress" class="nav-progress"></div></div>
    <span id="currentSection">Overview</span>
  </nav>

  <div class="search-container">
    <input id="searchInput" type="text" placeholder="Search...">
    <div id="searchResults" class="search-results"></div>
  </div>

  <main>
    <div class="section active" id="overview">
      <h1 class="section-title">Platform Overview</h1>
      <p>GPU nodes are introduced later. This guide walks through the platform.</p>
      <a href="#networking">Jump to networking</a>
      <div class="progress-bar"><div class="progress-fill" style="width: 75%"></div></div>
    </div>

    <div class="section" id="gpu">
      <h2>GPU Management</h2>
      <p>GPU Management covers scheduling,   device plugins
         and quotas for accelerated workloads.</p>
      <div class="code-container">
        <button class="copy-btn">Copy</button>
        <pre><code>nvidia-smi --query-gpu=name</code></pre>
      </div>
      <div class="progress-bar"><div class="progress-fill" style="color: green; width: 40%"></div></div>
    </div>

    <div class="section" id="networking">
      <h2>Networking</h2>
      <p>Routes and services expose workloads.</p>
      <div class="table-search"><input type="text" data-table="ports"></div>
      <table id="ports">
        <tr><th>Port</th><th>Use</th></tr>
        <tr><td>8080</td><td>Web UI</td></tr>
        <tr><td>11434</td><td>Ollama API</td></tr>
        <tr><td>443</td><td>Route TLS</td></tr>
      </table>
    </div>

    <div class="section" id="storage">
      <h3>Persistent volumes</h3>
      <p>Claims bind to volumes provisioned by the storage class.</p>
      <div class="table-container">
        <div class="table-search"><input type="text"></div>
        <table class="table">
          <tr><th>Class</th><th>Mode</th></tr>
          <tr><td>gp3</td><td>ReadWriteOnce</td></tr>
          <tr><td>efs</td><td>ReadWriteMany</td></tr>
        </table>
      </div>
      <button class="copy-btn">Copy</button>
    </div>
  </main>
</body>
</html>
"##;

pub const BLOG_PAGE: &str = r##"<!DOCTYPE html>
<html>
<body>
  <div class="tag-filters">
    <a href="#" class="blog-tag">All</a>
    <a href="#" class="blog-tag">GPU</a>
    <a href="#" class="blog-tag">Security</a>
  </div>
  <input id="blogSearch" type="text">
  <div class="blog-grid">
    <article class="blog-post-card">
      <h2 class="blog-post-title">Scaling GPU Workloads</h2>
      <p class="blog-post-excerpt">Lessons from running inference at scale.</p>
      <span class="blog-tag">GPU</span>
      <span class="blog-tag">Kubernetes</span>
    </article>
    <article class="blog-post-card">
      <h2 class="blog-post-title">Hardening Routes</h2>
      <p class="blog-post-excerpt">TLS everywhere without the pain.</p>
      <span class="blog-tag">Security</span>
    </article>
    <article class="blog-post-card">
      <h2 class="blog-post-title">Release Notes</h2>
      <p class="blog-post-excerpt">What changed in the last quarter.</p>
      <span class="blog-tag">News</span>
      <span class="blog-tag">Security</span>
    </article>
  </div>
</body>
</html>
"##;
