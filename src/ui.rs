pub fn render_index(today: &str) -> String {
    INDEX_HTML.replace("{{TODAY}}", today)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Sport Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #14161a;
      --bg-2: #3a0d16;
      --ink: #f4f1ec;
      --muted: #9a948c;
      --accent: #c41e3a;
      --card: rgba(28, 30, 36, 0.92);
      --cell: #1e2027;
      --line: rgba(255, 255, 255, 0.1);
      --shadow: 0 24px 60px rgba(0, 0, 0, 0.45);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #1b1d22 60%, #101114 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(980px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      border: 1px solid var(--line);
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.6rem);
      margin: 0;
    }

    h2 {
      margin: 0;
      font-size: 1.3rem;
    }

    .subtitle {
      margin: 4px 0 0;
      color: var(--muted);
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(255, 255, 255, 0.06);
      border-radius: 999px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 16px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
    }

    button.ghost {
      background: transparent;
      color: var(--muted);
    }

    button.ghost.active {
      background: rgba(255, 255, 255, 0.12);
      color: var(--ink);
    }

    .view {
      display: none;
      gap: 18px;
    }

    .view.active {
      display: grid;
    }

    .toolbar {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 6px;
    }

    .weekday {
      text-align: center;
      color: var(--muted);
      font-weight: 600;
      padding: 6px 0;
    }

    .cell {
      min-height: 92px;
      background: var(--cell);
      border: 1px solid var(--line);
      border-radius: 12px;
      padding: 6px;
      display: grid;
      align-content: start;
      gap: 4px;
    }

    .cell.blank {
      background: transparent;
      border-color: transparent;
    }

    .cell.today {
      border-color: var(--accent);
    }

    .cell .num {
      color: var(--muted);
      font-size: 0.85rem;
    }

    .chip {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 4px;
      font-size: 0.8rem;
      background: rgba(196, 30, 58, 0.22);
      border-radius: 999px;
      padding: 2px 8px;
      cursor: pointer;
    }

    .stats {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 14px;
    }

    .stat {
      background: var(--cell);
      border-radius: 18px;
      padding: 16px;
      border: 1px solid var(--line);
      display: grid;
      gap: 6px;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--muted);
    }

    .stat .value {
      font-size: 1.6rem;
      font-weight: 600;
    }

    .stat .hint {
      color: var(--muted);
      font-size: 0.9rem;
    }

    .cards {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(180px, 1fr));
      gap: 12px;
    }

    .card {
      background: var(--cell);
      border: 1px solid var(--line);
      border-radius: 14px;
      padding: 14px;
      display: grid;
      gap: 4px;
      text-align: center;
    }

    svg {
      width: 100%;
      height: auto;
    }

    .chart-grid {
      stroke: rgba(255, 255, 255, 0.08);
    }

    .chart-label {
      fill: var(--muted);
      font-size: 11px;
    }

    .chart-point {
      fill: var(--accent);
    }

    dialog {
      background: var(--card);
      color: var(--ink);
      border: 1px solid var(--line);
      border-radius: 18px;
      padding: 24px;
      width: min(420px, 92vw);
    }

    dialog form {
      display: grid;
      gap: 12px;
    }

    label {
      display: grid;
      gap: 4px;
      color: var(--muted);
      font-size: 0.9rem;
    }

    input, select, textarea {
      font: inherit;
      padding: 8px 10px;
      border-radius: 10px;
      border: 1px solid var(--line);
      background: var(--cell);
      color: var(--ink);
    }

    .row {
      display: flex;
      gap: 8px;
      justify-content: flex-end;
    }

    .status {
      min-height: 1.2em;
      color: var(--muted);
    }

    .status[data-type="error"] {
      color: #ff8a8a;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Sport Tracker</h1>
        <p class="subtitle">Today is <span id="today">{{TODAY}}</span></p>
      </div>
      <nav class="tabs" role="tablist">
        <button class="ghost active" data-tab="calendar">Calendar</button>
        <button class="ghost" data-tab="recap">Sport recap</button>
        <button class="ghost" data-tab="food">Food score</button>
      </nav>
    </header>

    <section class="view active" id="view-calendar">
      <div class="toolbar">
        <button class="ghost" id="prev-month">&larr;</button>
        <h2 id="month-title"></h2>
        <button class="ghost" id="next-month">&rarr;</button>
        <button id="add-session">Add session</button>
      </div>
      <div class="grid" id="calendar-grid"></div>
    </section>

    <section class="view" id="view-recap">
      <div class="toolbar">
        <h2 id="recap-title">Sport recap</h2>
        <div class="tabs" id="sport-tabs"></div>
      </div>
      <div class="stats">
        <div class="stat">
          <span class="label">Total sessions</span>
          <span class="value" id="recap-count">0</span>
          <span class="hint" id="recap-recent-count"></span>
        </div>
        <div class="stat">
          <span class="label">Total duration</span>
          <span class="value" id="recap-total">0 min</span>
          <span class="hint" id="recap-recent-total"></span>
        </div>
        <div class="stat">
          <span class="label">Average duration</span>
          <span class="value" id="recap-average">0 min</span>
        </div>
      </div>
      <h2>Recent sessions</h2>
      <div class="cards" id="recap-recent"></div>
    </section>

    <section class="view" id="view-food">
      <div class="toolbar">
        <h2>Food score</h2>
        <div class="tabs" id="timeframe-tabs">
          <button class="ghost active" data-timeframe="week">Week</button>
          <button class="ghost" data-timeframe="month">Month</button>
          <button class="ghost" data-timeframe="all">All</button>
        </div>
        <button id="add-food">New</button>
      </div>
      <div class="stats">
        <div class="stat">
          <span class="label">Total</span>
          <span class="value" id="food-total">0</span>
        </div>
        <div class="stat">
          <span class="label">Average per entry</span>
          <span class="value" id="food-average">0</span>
        </div>
      </div>
      <svg id="food-chart" viewBox="0 0 600 260" role="img" aria-label="Food score timeline"></svg>
    </section>

    <div class="status" id="status"></div>
  </main>

  <dialog id="session-dialog">
    <form id="session-form" method="dialog">
      <h2 id="session-dialog-title">Add session</h2>
      <label>Date <input type="date" name="date" required /></label>
      <label>Sport <select name="sport_id" id="sport-select" required></select></label>
      <label>Duration (minutes) <input type="number" name="duration" min="1" value="30" required /></label>
      <label>Notes <textarea name="notes" rows="3"></textarea></label>
      <div class="row">
        <button type="button" class="ghost" id="delete-session" hidden>Delete</button>
        <button type="button" class="ghost" data-close>Cancel</button>
        <button type="submit">Save</button>
      </div>
    </form>
  </dialog>

  <dialog id="food-dialog">
    <form id="food-form" method="dialog">
      <h2>Add food entry</h2>
      <label>Date <input type="date" name="date" required /></label>
      <label>Calories <input type="number" name="value" min="0" value="0" required /></label>
      <div class="row">
        <button type="button" class="ghost" data-close>Cancel</button>
        <button type="submit">Add entry</button>
      </div>
    </form>
  </dialog>

  <script>
    const today = document.getElementById('today').textContent;
    const statusEl = document.getElementById('status');
    const sessionDialog = document.getElementById('session-dialog');
    const sessionForm = document.getElementById('session-form');
    const foodDialog = document.getElementById('food-dialog');
    const foodForm = document.getElementById('food-form');
    const deleteBtn = document.getElementById('delete-session');

    const view = {
      tab: 'calendar',
      month: today.slice(0, 7),
      sport: null,
      timeframe: 'week',
      editing: null
    };
    let sports = [];

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const request = async (url, options) => {
      const res = await fetch(url, options);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.status === 204 ? null : res.json();
    };

    const sendJson = (url, method, body) =>
      request(url, {
        method,
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      });

    const escapeHtml = (text) =>
      String(text).replace(/[&<>"']/g, (c) => `&#${c.charCodeAt(0)};`);

    const loadSports = async () => {
      sports = await request('/api/sports');
      if (!view.sport && sports.length) {
        view.sport = sports[0].id;
      }
      document.getElementById('sport-select').innerHTML = sports
        .map((s) => `<option value="${escapeHtml(s.id)}">${s.emoji} ${escapeHtml(s.name)}</option>`)
        .join('');
    };

    const renderCalendar = async () => {
      const data = await request(`/api/calendar?month=${view.month}`);
      view.month = data.month;
      document.getElementById('month-title').textContent = data.month;
      document.getElementById('prev-month').dataset.month = data.prev;
      document.getElementById('next-month').dataset.month = data.next;

      const heads = data.weekdays.map((d) => `<div class="weekday">${d}</div>`).join('');
      const blanks = '<div class="cell blank"></div>'.repeat(data.leading_blanks);
      const cells = data.days
        .map((day) => {
          const chips = day.sessions
            .map((s) => `<div class="chip" data-id="${escapeHtml(s.id)}" title="${escapeHtml(s.notes || '')}">${s.emoji}<span>${s.duration}'</span></div>`)
            .join('');
          const cls = day.date === today ? 'cell today' : 'cell';
          return `<div class="${cls}"><span class="num">${day.day}</span>${chips}</div>`;
        })
        .join('');

      const grid = document.getElementById('calendar-grid');
      grid.innerHTML = heads + blanks + cells;
      const byId = new Map(data.days.flatMap((d) => d.sessions).map((s) => [s.id, s]));
      grid.querySelectorAll('.chip').forEach((chip) => {
        chip.addEventListener('click', () => openSession(byId.get(chip.dataset.id)));
      });
    };

    const renderRecap = async () => {
      const tabs = document.getElementById('sport-tabs');
      tabs.innerHTML = sports
        .map((s) => `<button class="ghost${s.id === view.sport ? ' active' : ''}" data-sport="${escapeHtml(s.id)}">${s.emoji} ${escapeHtml(s.name)}</button>`)
        .join('');
      tabs.querySelectorAll('button').forEach((btn) => {
        btn.addEventListener('click', () => {
          view.sport = btn.dataset.sport;
          refresh();
        });
      });

      const query = view.sport ? `?sport=${encodeURIComponent(view.sport)}` : '';
      const data = await request(`/api/recap${query}`);
      const s = data.stats;
      document.getElementById('recap-count').textContent = s.count;
      document.getElementById('recap-recent-count').textContent = `${s.recent_count} in last ${data.window_days} days`;
      document.getElementById('recap-total').textContent = `${s.total_duration} min`;
      document.getElementById('recap-recent-total').textContent = `${s.recent_total_duration} min in last ${data.window_days} days`;
      document.getElementById('recap-average').textContent = `${Math.round(s.average_duration)} min`;
      document.getElementById('recap-recent').innerHTML = data.recent
        .map((r) => `<div class="card"><strong>${r.date}</strong><span>${r.duration} minutes</span><span class="hint">${escapeHtml(r.notes || '')}</span></div>`)
        .join('');
    };

    const renderFood = async () => {
      document.querySelectorAll('#timeframe-tabs button').forEach((btn) => {
        btn.classList.toggle('active', btn.dataset.timeframe === view.timeframe);
      });
      const data = await request(`/api/food?timeframe=${view.timeframe}`);
      document.getElementById('food-total').textContent = data.summary.total_value;
      document.getElementById('food-average').textContent = Math.round(data.summary.average_value);

      const width = 600;
      const height = 260;
      const pad = 34;
      const series = data.series;
      const step = series.length > 1 ? (width - pad * 2) / (series.length - 1) : 0;
      const y = (v) => height - pad - (v / data.max_value) * (height - pad * 2);
      let grid = '';
      for (let i = 0; i <= 4; i += 1) {
        const v = (data.max_value * i) / 4;
        grid += `<line class="chart-grid" x1="${pad}" y1="${y(v)}" x2="${width - pad}" y2="${y(v)}" />`;
      }
      const labelEvery = Math.max(1, Math.ceil(series.length / 7));
      const labels = series
        .map((p, i) => (i % labelEvery === 0 || i === series.length - 1)
          ? `<text class="chart-label" x="${pad + i * step}" y="${height - 10}" text-anchor="middle">${p.date.slice(5)}</text>`
          : '')
        .join('');
      const points = series
        .filter((p) => p.has_data)
        .map((p) => {
          const i = series.indexOf(p);
          return `<circle class="chart-point" cx="${pad + i * step}" cy="${y(p.value)}" r="6"><title>${p.date}: ${p.value}</title></circle>`;
        })
        .join('');
      document.getElementById('food-chart').innerHTML = grid + labels + points;
    };

    const refresh = async () => {
      try {
        if (view.tab === 'calendar') {
          await renderCalendar();
        } else if (view.tab === 'recap') {
          await renderRecap();
        } else {
          await renderFood();
        }
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    const openSession = (session) => {
      view.editing = session || null;
      document.getElementById('session-dialog-title').textContent = session ? 'Edit session' : 'Add session';
      sessionForm.date.value = session ? session.date : today;
      sessionForm.sport_id.value = session ? session.sport_id : (view.sport || '');
      sessionForm.duration.value = session ? session.duration : 30;
      sessionForm.notes.value = session ? (session.notes || '') : '';
      deleteBtn.hidden = !session;
      sessionDialog.showModal();
    };

    sessionForm.addEventListener('submit', async (event) => {
      event.preventDefault();
      const body = {
        date: sessionForm.date.value,
        sport_id: sessionForm.sport_id.value,
        duration: Number(sessionForm.duration.value),
        notes: sessionForm.notes.value
      };
      try {
        if (view.editing) {
          await sendJson(`/api/sessions/${encodeURIComponent(view.editing.id)}`, 'PUT', body);
        } else {
          await sendJson('/api/sessions', 'POST', body);
        }
        sessionDialog.close();
        setStatus('Saved', 'ok');
        await refresh();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    deleteBtn.addEventListener('click', async () => {
      if (!view.editing) {
        return;
      }
      try {
        await request(`/api/sessions/${encodeURIComponent(view.editing.id)}`, { method: 'DELETE' });
        sessionDialog.close();
        await refresh();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    foodForm.addEventListener('submit', async (event) => {
      event.preventDefault();
      try {
        await sendJson('/api/food', 'POST', {
          date: foodForm.date.value,
          value: Number(foodForm.value.value)
        });
        foodDialog.close();
        await refresh();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    document.querySelectorAll('[data-close]').forEach((btn) => {
      btn.addEventListener('click', () => btn.closest('dialog').close());
    });

    document.querySelectorAll('header .tabs button').forEach((btn) => {
      btn.addEventListener('click', () => {
        view.tab = btn.dataset.tab;
        document.querySelectorAll('header .tabs button').forEach((b) => b.classList.toggle('active', b === btn));
        document.querySelectorAll('.view').forEach((v) => v.classList.toggle('active', v.id === `view-${view.tab}`));
        refresh();
      });
    });

    document.querySelectorAll('#timeframe-tabs button').forEach((btn) => {
      btn.addEventListener('click', () => {
        view.timeframe = btn.dataset.timeframe;
        refresh();
      });
    });

    ['prev-month', 'next-month'].forEach((id) => {
      document.getElementById(id).addEventListener('click', (event) => {
        view.month = event.currentTarget.dataset.month;
        refresh();
      });
    });

    document.getElementById('add-session').addEventListener('click', () => openSession(null));
    document.getElementById('add-food').addEventListener('click', () => {
      foodForm.date.value = today;
      foodForm.value.value = 0;
      foodDialog.showModal();
    });

    loadSports()
      .then(refresh)
      .catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
