#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Welcome,
    MatchPerformance,
    Tournaments,
    PenaltyCards,
    HowToUse,
    Acknowledgments,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Welcome,
        Page::MatchPerformance,
        Page::Tournaments,
        Page::PenaltyCards,
        Page::HowToUse,
        Page::Acknowledgments,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Page::Welcome => "/",
            Page::MatchPerformance => "/match-performance",
            Page::Tournaments => "/tournaments",
            Page::PenaltyCards => "/penalty-cards",
            Page::HowToUse => "/how-to-use",
            Page::Acknowledgments => "/acknowledgments",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Welcome => "Welcome",
            Page::MatchPerformance => "Match Performance",
            Page::Tournaments => "Tournaments Statistics",
            Page::PenaltyCards => "Penalty Cards",
            Page::HowToUse => "How To Use",
            Page::Acknowledgments => "Acknowledgments",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Page::Welcome => "welcome",
            Page::MatchPerformance => "match-performance",
            Page::Tournaments => "tournaments",
            Page::PenaltyCards => "penalty-cards",
            Page::HowToUse => "how-to-use",
            Page::Acknowledgments => "acknowledgments",
        }
    }

    fn body(self) -> &'static str {
        match self {
            Page::Welcome => WELCOME_HTML,
            Page::MatchPerformance => MATCH_PERFORMANCE_HTML,
            Page::Tournaments => TOURNAMENTS_HTML,
            Page::PenaltyCards => PENALTY_CARDS_HTML,
            Page::HowToUse => HOW_TO_USE_HTML,
            Page::Acknowledgments => ACKNOWLEDGMENTS_HTML,
        }
    }
}

pub fn render_page(page: Page) -> String {
    SHELL_HTML
        .replace("{{TITLE}}", page.label())
        .replace("{{NAV}}", &render_nav(page))
        .replace("{{PAGE}}", page.key())
        .replace("{{CONTENT}}", page.body())
}

fn render_nav(active: Page) -> String {
    Page::ALL
        .iter()
        .map(|&page| {
            let class = if page == active { "nav-link active" } else { "nav-link" };
            format!(
                r#"<a class="{class}" href="{}">{}</a>"#,
                page.path(),
                page.label()
            )
        })
        .collect::<Vec<_>>()
        .join("\n      ")
}

const WELCOME_HTML: &str = r#"
    <header>
      <h1>UEFA Euro Championship Data Analysis</h1>
      <p class="subtitle">Interactive charts on how each country has performed at the European Championship, as of June 14, 2024.</p>
    </header>
    <section class="card prose">
      <h2>Go Germany!</h2>
      <p>Germany hosts the 2024 tournament. The pages in the sidebar chart its record, and everyone else's, across the tournament's history.</p>
      <h2>Check out</h2>
      <p>Start with the pages in the sidebar. Every chart is driven by the same ranked table shown underneath it.</p>
    </section>
"#;

const MATCH_PERFORMANCE_HTML: &str = r#"
    <header>
      <h1>Match performance</h1>
      <p class="subtitle">Performance of national teams in the UEFA Euro Championship as of June 14, 2024.</p>
    </header>
    <div class="tabs" role="tablist">
      <button class="tab active" type="button" data-tab="goals" role="tab">Goals &amp; Points</button>
      <button class="tab" type="button" data-tab="results" role="tab">Won &amp; Lost</button>
    </div>
    <section class="tab-panel card" data-panel="goals" data-endpoint="/api/match-performance/goals">
      <ul class="prose">
        <li><code>Total Points</code>: points earned by each team, 3 for a win, 1 for a draw, 0 for a loss.</li>
        <li><code>Goals Scored</code>: goals scored by each team during the tournament.</li>
        <li><code>Goals Conceded</code>: goals conceded by each team during the tournament.</li>
      </ul>
      <label class="picker">Select number of top teams to display: <select></select></label>
      <div class="figure"></div>
      <h3>Input Data</h3>
      <p class="hint">This table follows the drop-down above. Click a column header to sort.</p>
      <div class="grid"></div>
      <p class="hint">Matches decided in extra time count as wins and losses; matches decided by penalty shoot-outs count as draws.</p>
    </section>
    <section class="tab-panel card" data-panel="results" data-endpoint="/api/match-performance/results" hidden>
      <ul class="prose">
        <li><code>Matches Played</code>: matches played by each team.</li>
        <li><code>Won</code>, <code>Drawn</code>, <code>Lost</code>: results of those matches.</li>
      </ul>
      <label class="picker">Select number of top teams to display (by Matches Played): <select></select></label>
      <div class="figure"></div>
      <h3>Input Data</h3>
      <div class="grid"></div>
    </section>
"#;

const TOURNAMENTS_HTML: &str = r#"
    <header>
      <h1>Tournaments statistics</h1>
      <p class="subtitle">Hosting and medal records of the UEFA Euro Championship as of June 14, 2024.</p>
    </header>
    <div class="tabs" role="tablist">
      <button class="tab active" type="button" data-tab="hosts" role="tab">Host Nations</button>
      <button class="tab" type="button" data-tab="medals" role="tab">Medals Tally</button>
    </div>
    <section class="tab-panel card" data-panel="hosts" data-endpoint="/api/tournaments/hosts">
      <ul class="prose">
        <li><code>Number of times hosted</code>: how often each nation has hosted the tournament. Co-hosted editions count as shares and are rounded.</li>
      </ul>
      <label class="picker">Select number of top host nations to display: <select></select></label>
      <div class="figure"></div>
      <h3>Input Data</h3>
      <div class="grid"></div>
    </section>
    <section class="tab-panel card" data-panel="medals" data-endpoint="/api/tournaments/medals" hidden>
      <ul class="prose">
        <li><code>Gold</code>, <code>Silver</code>, <code>Bronze</code>: medals won by each team.</li>
      </ul>
      <p class="hint">The third place playoff was removed in 1984. Since then both losing semi-finalists count under bronze.</p>
      <label class="picker">Select number of top teams to display (by Total Medals): <select></select></label>
      <div class="figure"></div>
      <h3>Input Data</h3>
      <div class="grid"></div>
    </section>
"#;

const PENALTY_CARDS_HTML: &str = r#"
    <header>
      <h1>Penalty Cards</h1>
      <p class="subtitle">Red and Two-Yellow cards issued to each country across the stages of the Euro, as of June 14, 2024.</p>
    </header>
    <section class="card prose">
      <ul>
        <li><code>Red Card</code>: issued for serious offences. The player is dismissed and cannot be replaced.</li>
        <li><code>Two-Yellow Cards</code>: a second caution in the same match, which also dismisses the player.</li>
      </ul>
    </section>
    <div class="tabs" role="tablist" id="round-tabs"></div>
    <section class="card" id="round-view">
      <div class="round-panels"></div>
      <h3 id="round-title"></h3>
      <div class="grid"></div>
    </section>
"#;

const HOW_TO_USE_HTML: &str = r#"
    <header>
      <h1>How to use this website?</h1>
      <p class="subtitle">All graphs on this site are interactive. These short videos show how to work with them.</p>
    </header>
    <label class="picker">Video size: <input type="range" id="video-width" min="0" max="100" value="50" /> <span id="video-width-label">50%</span></label>
    <p class="hint"><a href="https://www.youtube.com/playlist?list=PLRIoderjwGT-d9oSkMysrYypXS6m6gdTs">Full playlist of videos on YouTube.</a></p>
    <h3>Pages &amp; Graphs</h3>
    <div class="video"><iframe src="https://www.youtube.com/embed/XAe64jUHW0c" allowfullscreen></iframe></div>
    <h3>Drop-downs and Tables</h3>
    <div class="video"><iframe src="https://www.youtube.com/embed/7FWUb8-z9FQ" allowfullscreen></iframe></div>
    <h3>Tabs &amp; Zooming</h3>
    <div class="video"><iframe src="https://www.youtube.com/embed/1DuUr80vY1c" allowfullscreen></iframe></div>
    <h3>Dynamic graphs</h3>
    <div class="video"><iframe src="https://www.youtube.com/embed/ixG7ZYcgsWE" allowfullscreen></iframe></div>
"#;

const ACKNOWLEDGMENTS_HTML: &str = r#"
    <header>
      <h1>Acknowledgments</h1>
    </header>
    <section class="card prose">
      <p>Tournament data comes from <a href="https://en.wikipedia.org/wiki/UEFA_European_Championship">Wikipedia</a>, licensed under CC BY-SA 3.0.</p>
      <p>If you spot an inaccuracy in the data, please open an issue.</p>
    </section>
"#;

const SHELL_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>UEFA Euro Graphs | {{TITLE}}</title>
  <style>
    :root {
      --bg: #f4f6fb;
      --ink: #1f2430;
      --muted: #6b7280;
      --accent: #1d4ed8;
      --card: #ffffff;
      --line: rgba(31, 36, 48, 0.1);
      --shadow: 0 18px 40px rgba(31, 36, 48, 0.08);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Segoe UI", "Trebuchet MS", sans-serif;
      display: grid;
      grid-template-columns: 240px 1fr;
    }

    nav {
      background: #111827;
      padding: 28px 16px;
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    .nav-link {
      color: #cbd5e1;
      text-decoration: none;
      padding: 10px 14px;
      border-radius: 10px;
    }

    .nav-link.active {
      background: #1f2937;
      color: white;
      font-weight: 600;
    }

    main {
      padding: 32px;
      display: grid;
      gap: 22px;
      align-content: start;
      min-width: 0;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.8rem, 3vw, 2.4rem);
    }

    .subtitle,
    .hint {
      margin: 6px 0 0;
      color: var(--muted);
    }

    .card {
      background: var(--card);
      border-radius: 18px;
      padding: 24px;
      box-shadow: var(--shadow);
      display: grid;
      gap: 16px;
      min-width: 0;
    }

    .tabs {
      display: flex;
      flex-wrap: wrap;
      gap: 6px;
    }

    .tab {
      border: none;
      border-radius: 999px;
      padding: 8px 16px;
      background: rgba(29, 78, 216, 0.08);
      color: var(--accent);
      font-weight: 600;
      cursor: pointer;
    }

    .tab.active {
      background: var(--accent);
      color: white;
    }

    .figure {
      display: grid;
      gap: 18px;
    }

    .figure-title {
      font-weight: 600;
      margin: 0;
    }

    .panel-title {
      font-size: 0.95rem;
      font-weight: 600;
      margin: 0 0 6px;
      text-align: center;
    }

    svg {
      width: 100%;
      height: auto;
      display: block;
    }

    svg text {
      font-size: 11px;
      fill: #4b5563;
    }

    .legend {
      display: flex;
      gap: 14px;
      justify-content: center;
      font-size: 0.85rem;
    }

    .legend span::before {
      content: "";
      display: inline-block;
      width: 10px;
      height: 10px;
      margin-right: 6px;
      border-radius: 2px;
      background: var(--swatch);
    }

    .grid {
      overflow-x: auto;
    }

    table {
      border-collapse: collapse;
      width: 100%;
      font-size: 0.9rem;
    }

    th,
    td {
      padding: 8px 12px;
      border-bottom: 1px solid var(--line);
      text-align: left;
      white-space: nowrap;
    }

    th {
      cursor: pointer;
      user-select: none;
    }

    th[data-sort="asc"]::after {
      content: " \25B2";
    }

    th[data-sort="desc"]::after {
      content: " \25BC";
    }

    .no-data {
      color: #dc2626;
      font-size: 18px;
      font-weight: 700;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .video {
      width: 50%;
      margin: 0 auto;
      aspect-ratio: 16 / 9;
    }

    .video iframe {
      width: 100%;
      height: 100%;
      border: 0;
    }

    @media (max-width: 800px) {
      body {
        grid-template-columns: 1fr;
      }
      .figure {
        grid-template-columns: 1fr !important;
      }
    }
  </style>
</head>
<body data-page="{{PAGE}}">
  <nav>
      {{NAV}}
  </nav>
  <main>
    {{CONTENT}}
    <div class="status" id="status"></div>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const PALETTE = ['#636efa', '#ef553b', '#00cc96', '#ab63fa', '#ffa15a', '#19d3f3', '#ff6692', '#b6e880', '#ff97ff', '#fecb52'];
    const SVG_NS = 'http://www.w3.org/2000/svg';

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const fetchJson = async (url) => {
      const res = await fetch(url);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || `Request failed: ${url}`);
      }
      return res.json();
    };

    const escapeHtml = (value) => String(value ?? '')
      .replace(/&/g, '&amp;')
      .replace(/</g, '&lt;')
      .replace(/>/g, '&gt;');

    const formatValue = (value) => {
      if (typeof value !== 'number') {
        return value;
      }
      return Number.isInteger(value) ? value.toString() : (Math.round(value * 100) / 100).toString();
    };

    const renderBar = (panel) => {
      const width = 420;
      const height = 300;
      const left = 40;
      const bottom = 70;
      const top = 16;
      const labels = panel.series.length ? panel.series[0].labels : [];
      if (!labels.length) {
        return '<p class="hint">No data</p>';
      }
      const totals = labels.map((_, i) => panel.series.reduce((acc, s) => acc + (s.values[i] || 0), 0));
      const max = Math.max(1, ...totals);
      const slot = (width - left) / labels.length;
      const barWidth = Math.max(4, slot * 0.7);
      const scale = (height - top - bottom) / max;

      let bars = '';
      labels.forEach((label, i) => {
        let base = height - bottom;
        const x = left + i * slot + (slot - barWidth) / 2;
        panel.series.forEach((series, s) => {
          const value = series.values[i] || 0;
          const h = value * scale;
          base -= h;
          const color = series.color || PALETTE[s % PALETTE.length];
          bars += `<rect x="${x.toFixed(1)}" y="${base.toFixed(1)}" width="${barWidth.toFixed(1)}" height="${h.toFixed(1)}" fill="${color}"><title>${escapeHtml(label)} ${escapeHtml(series.name)}: ${formatValue(value)}</title></rect>`;
          if (panel.show_values && value > 0 && h > 12) {
            bars += `<text x="${(x + barWidth / 2).toFixed(1)}" y="${(base + h / 2 + 4).toFixed(1)}" text-anchor="middle" style="fill:#fff">${formatValue(value)}</text>`;
          }
        });
        const lx = x + barWidth / 2;
        const ly = height - bottom + 12;
        bars += `<text x="${lx.toFixed(1)}" y="${ly}" text-anchor="end" transform="rotate(-45 ${lx.toFixed(1)} ${ly})">${escapeHtml(label)}</text>`;
      });

      let axis = '';
      for (let t = 0; t <= 4; t += 1) {
        const value = (max * t) / 4;
        const y = height - bottom - value * scale;
        axis += `<line x1="${left}" x2="${width}" y1="${y.toFixed(1)}" y2="${y.toFixed(1)}" stroke="rgba(0,0,0,0.08)" />`;
        axis += `<text x="${left - 6}" y="${(y + 4).toFixed(1)}" text-anchor="end">${formatValue(Math.round(value * 10) / 10)}</text>`;
      }

      let legend = '';
      if (panel.series.length > 1) {
        legend = '<div class="legend">' + panel.series
          .map((s, i) => `<span style="--swatch:${s.color || PALETTE[i % PALETTE.length]}">${escapeHtml(s.name)}</span>`)
          .join('') + '</div>';
      }

      return `<svg viewBox="0 0 ${width} ${height}" role="img">${axis}${bars}</svg>${legend}`;
    };

    const renderPie = (panel) => {
      const series = panel.series[0];
      const total = series ? series.values.reduce((acc, v) => acc + v, 0) : 0;
      if (!total) {
        return '<p class="hint">No data</p>';
      }
      const size = 320;
      const r = 120;
      const cx = size / 2;
      const cy = size / 2;
      let angle = -Math.PI / 2;
      let slices = '';
      series.values.forEach((value, i) => {
        const share = value / total;
        const next = angle + share * Math.PI * 2;
        const color = PALETTE[i % PALETTE.length];
        const label = series.labels[i];
        const percent = `${Math.round(share * 100)}%`;
        if (share >= 0.9999) {
          slices += `<circle cx="${cx}" cy="${cy}" r="${r}" fill="${color}"><title>${escapeHtml(label)}: ${percent}</title></circle>`;
        } else {
          const x1 = cx + r * Math.cos(angle);
          const y1 = cy + r * Math.sin(angle);
          const x2 = cx + r * Math.cos(next);
          const y2 = cy + r * Math.sin(next);
          const large = share > 0.5 ? 1 : 0;
          slices += `<path d="M ${cx} ${cy} L ${x1.toFixed(2)} ${y1.toFixed(2)} A ${r} ${r} 0 ${large} 1 ${x2.toFixed(2)} ${y2.toFixed(2)} Z" fill="${color}" stroke="#fff"><title>${escapeHtml(label)}: ${formatValue(value)} (${percent})</title></path>`;
        }
        if (share >= 0.04) {
          const mid = (angle + next) / 2;
          const tx = cx + r * 0.65 * Math.cos(mid);
          const ty = cy + r * 0.65 * Math.sin(mid);
          slices += `<text x="${tx.toFixed(1)}" y="${ty.toFixed(1)}" text-anchor="middle" style="fill:#fff">${escapeHtml(label)}: ${percent}</text>`;
        }
        angle = next;
      });
      return `<svg viewBox="0 0 ${size} ${size}" role="img">${slices}</svg>`;
    };

    const renderFigure = (container, figure) => {
      container.style.gridTemplateColumns = `repeat(${figure.cols}, minmax(0, 1fr))`;
      const panels = figure.panels.map((panel) => {
        const body = panel.kind === 'pie' ? renderPie(panel) : renderBar(panel);
        return `<div><p class="panel-title">${escapeHtml(panel.title)}</p>${body}</div>`;
      });
      const heading = figure.panels.length > 1
        ? `<p class="figure-title" style="grid-column: 1 / -1">${escapeHtml(figure.title)}</p>`
        : '';
      container.innerHTML = heading + panels.join('');
    };

    const renderGrid = (container, table) => {
      let rows = table.rows.slice();
      let sortIndex = -1;
      let ascending = true;

      const draw = () => {
        const head = table.columns
          .map((column, i) => {
            const sort = i === sortIndex ? (ascending ? 'asc' : 'desc') : '';
            return `<th data-index="${i}" data-sort="${sort}">${escapeHtml(column)}</th>`;
          })
          .join('');
        const body = rows
          .map((row) => `<tr>${row.map((cell) => `<td>${escapeHtml(formatValue(cell))}</td>`).join('')}</tr>`)
          .join('');
        container.innerHTML = `<table><thead><tr>${head}</tr></thead><tbody>${body}</tbody></table>`;
        container.querySelectorAll('th').forEach((th) => {
          th.addEventListener('click', () => {
            const index = Number(th.dataset.index);
            ascending = index === sortIndex ? !ascending : true;
            sortIndex = index;
            rows.sort((a, b) => {
              const x = a[index];
              const y = b[index];
              if (x === y) return 0;
              if (x === null) return 1;
              if (y === null) return -1;
              const order = typeof x === 'number' && typeof y === 'number' ? x - y : String(x).localeCompare(String(y));
              return ascending ? order : -order;
            });
            draw();
          });
        });
      };

      draw();
    };

    const setupTabs = () => {
      const tabs = Array.from(document.querySelectorAll('.tab[data-tab]'));
      tabs.forEach((button) => {
        button.addEventListener('click', () => {
          tabs.forEach((other) => other.classList.toggle('active', other === button));
          document.querySelectorAll('.tab-panel').forEach((panel) => {
            panel.hidden = panel.dataset.panel !== button.dataset.tab;
          });
        });
      });
    };

    const setupRankedPanel = (panel) => {
      const select = panel.querySelector('select');
      const figureEl = panel.querySelector('.figure');
      const gridEl = panel.querySelector('.grid');

      const load = async (limit) => {
        const view = await fetchJson(`${panel.dataset.endpoint}?limit=${encodeURIComponent(limit)}`);
        if (!select.options.length) {
          select.innerHTML = view.options
            .map((option) => `<option value="${option.value}">${escapeHtml(option.label)}</option>`)
            .join('');
        }
        select.value = view.limit;
        renderFigure(figureEl, view.figure);
        renderGrid(gridEl, view.grid);
      };

      select.addEventListener('change', () => {
        load(select.value).catch((err) => setStatus(err.message, 'error'));
      });
      return load('top5');
    };

    const setupPenaltyCards = async () => {
      const tabsEl = document.getElementById('round-tabs');
      const viewEl = document.getElementById('round-view');
      const panelsEl = viewEl.querySelector('.round-panels');
      const titleEl = document.getElementById('round-title');
      const gridEl = viewEl.querySelector('.grid');
      const { rounds } = await fetchJson('/api/penalty-cards/rounds');

      const load = async (round) => {
        const view = await fetchJson(`/api/penalty-cards?round=${encodeURIComponent(round)}`);
        panelsEl.innerHTML = '';
        view.panels.forEach((panel) => {
          const el = document.createElement('div');
          if (panel.status === 'chart') {
            el.className = 'figure';
            renderFigure(el, panel.figure);
          } else {
            el.className = 'no-data';
            el.textContent = panel.message;
          }
          panelsEl.appendChild(el);
        });
        titleEl.textContent = `Data for ${view.round}`;
        renderGrid(gridEl, view.grid);
      };

      tabsEl.innerHTML = rounds
        .map((round, i) => `<button class="tab${i === 0 ? ' active' : ''}" type="button" data-round="${escapeHtml(round)}">${escapeHtml(round)}</button>`)
        .join('');
      const buttons = Array.from(tabsEl.querySelectorAll('.tab'));
      buttons.forEach((button) => {
        button.addEventListener('click', () => {
          buttons.forEach((other) => other.classList.toggle('active', other === button));
          load(button.dataset.round).catch((err) => setStatus(err.message, 'error'));
        });
      });
      await load(rounds[0]);
    };

    const setupVideos = () => {
      const slider = document.getElementById('video-width');
      const label = document.getElementById('video-width-label');
      const apply = () => {
        const width = Math.max(Number(slider.value), 1);
        label.textContent = `${slider.value}%`;
        document.querySelectorAll('.video').forEach((video) => {
          video.style.width = `${width}%`;
        });
      };
      slider.addEventListener('input', apply);
      apply();
    };

    const init = async () => {
      const page = document.body.dataset.page;
      if (page === 'match-performance' || page === 'tournaments') {
        setupTabs();
        await Promise.all(Array.from(document.querySelectorAll('.tab-panel')).map(setupRankedPanel));
      } else if (page === 'penalty-cards') {
        await setupPenaltyCards();
      } else if (page === 'how-to-use') {
        setupVideos();
      }
    };

    init().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"##;
