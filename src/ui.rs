use crate::date_key::DateKey;
use crate::models::Task;
use maud::{html, Markup};

pub fn render_index(today: DateKey, tasks: &[Task]) -> String {
    let completed = tasks.iter().filter(|task| task.completed).count();
    INDEX_HTML
        .replace("{{DATE}}", &today.to_string())
        .replace("{{DONE}}", &completed.to_string())
        .replace("{{TOTAL}}", &tasks.len().to_string())
        .replace("{{TASKS}}", &render_tasks(tasks).into_string())
}

fn render_tasks(tasks: &[Task]) -> Markup {
    html! {
        @for task in tasks {
            li data-id=(task.id) class=(if task.completed { "task done" } else { "task" }) {
                span.check {}
                span.text { (task.text) }
            }
        }
    }
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Daily Task Tracker</title>
  <style>
    :root {
      --bg: #eef0fb;
      --ink: #24243a;
      --muted: #6b6b80;
      --accent: #5b4de0;
      --card: #ffffff;
      --shadow: 0 18px 48px rgba(60, 50, 140, 0.14);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, var(--bg), #f4ecfb);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      padding: 28px 16px 48px;
    }

    .app {
      width: min(960px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 20px;
    }

    .card {
      background: var(--card);
      border-radius: 20px;
      box-shadow: var(--shadow);
      padding: 24px;
    }

    h1, h2 {
      margin: 0 0 12px;
    }

    .progress {
      height: 12px;
      border-radius: 999px;
      background: #e4e2f5;
      overflow: hidden;
    }

    .progress > div {
      height: 100%;
      background: var(--accent);
      transition: width 400ms ease;
    }

    form {
      display: flex;
      gap: 10px;
      margin-bottom: 16px;
    }

    input[type="text"] {
      flex: 1;
      padding: 12px 14px;
      border-radius: 12px;
      border: 2px solid #d7d3f3;
      font-size: 1rem;
    }

    button {
      border: none;
      border-radius: 12px;
      padding: 10px 16px;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
    }

    button.ghost {
      background: #ecebf7;
      color: var(--ink);
    }

    ul {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 8px;
    }

    .task {
      display: flex;
      align-items: center;
      gap: 10px;
      padding: 12px;
      border-radius: 12px;
      border: 1px solid #e6e4f4;
    }

    .task .text {
      flex: 1;
      cursor: pointer;
    }

    .task .check {
      width: 20px;
      height: 20px;
      border-radius: 50%;
      border: 2px solid #c9c6e0;
    }

    .task.done .check {
      background: #3bb273;
      border-color: #3bb273;
    }

    .task.done .text {
      text-decoration: line-through;
      color: var(--muted);
    }

    .heatmap {
      display: flex;
      gap: 3px;
      overflow-x: auto;
    }

    .week {
      display: grid;
      grid-template-rows: repeat(7, 12px);
      gap: 3px;
    }

    .cell {
      width: 12px;
      height: 12px;
      border-radius: 3px;
      cursor: pointer;
    }

    .b0 { background: #f4f4f6; border: 1px solid #e3e3e8; cursor: default; }
    .b1 { background: #e2e2e8; }
    .b2 { background: #9be3a8; }
    .b3 { background: #62cc7c; }
    .b4 { background: #36b25a; }
    .b5 { background: #23924a; }
    .b6 { background: #18703a; }

    .metrics {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 12px;
      margin-bottom: 16px;
    }

    .metric .value {
      font-size: 1.6rem;
      font-weight: 600;
    }

    .metric .label, .muted {
      color: var(--muted);
      font-size: 0.85rem;
    }

    .status {
      min-height: 1.2em;
      font-size: 0.9rem;
    }

    .status.error {
      color: #c0392b;
    }
  </style>
</head>
<body>
  <main class="app">
    <section class="card">
      <h1>Daily Task Tracker</h1>
      <p class="muted">Today is <span id="date">{{DATE}}</span></p>
      <p><strong id="done">{{DONE}}</strong> / <strong id="total">{{TOTAL}}</strong> tasks completed</p>
      <div class="progress"><div id="bar" style="width: 0%"></div></div>
    </section>

    <section class="card">
      <h2>Today's tasks</h2>
      <form id="add-form">
        <input id="new-task" type="text" placeholder="Add a new task..." autocomplete="off" />
        <button type="submit">Add task</button>
      </form>
      <ul id="tasks">{{TASKS}}</ul>
      <p id="status" class="status"></p>
    </section>

    <section class="card">
      <h2>Activity</h2>
      <div class="metrics">
        <div class="metric"><div id="m-today" class="value">-</div><div class="label">Completed today</div></div>
        <div class="metric"><div id="m-rate" class="value">-</div><div class="label">Completion rate</div></div>
        <div class="metric"><div id="m-done" class="value">-</div><div class="label">Tasks completed</div></div>
      </div>
      <div id="heatmap" class="heatmap"></div>
      <div id="day-detail" class="muted"></div>
    </section>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const tasksEl = document.getElementById('tasks');
    const detailEl = document.getElementById('day-detail');

    const setStatus = (message, tone) => {
      statusEl.textContent = message;
      statusEl.className = `status ${tone || ''}`;
    };

    const request = async (method, url, body) => {
      const res = await fetch(url, {
        method,
        headers: body ? { 'content-type': 'application/json' } : {},
        body: body ? JSON.stringify(body) : undefined
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    const taskItem = (task) => {
      const li = document.createElement('li');
      li.className = task.completed ? 'task done' : 'task';
      const check = document.createElement('span');
      check.className = 'check';
      const text = document.createElement('span');
      text.className = 'text';
      text.textContent = task.text;
      text.title = task.notes || '';
      const toggle = () => run(() => request('POST', `/api/tasks/${task.id}/toggle`));
      check.addEventListener('click', toggle);
      text.addEventListener('click', toggle);

      const rename = document.createElement('button');
      rename.className = 'ghost';
      rename.textContent = 'Rename';
      rename.addEventListener('click', () => {
        const next = prompt('Rename task', task.text);
        if (next !== null) run(() => request('PUT', `/api/tasks/${task.id}`, { text: next }));
      });

      const notes = document.createElement('button');
      notes.className = 'ghost';
      notes.textContent = task.notes ? 'Notes' : 'Add note';
      notes.addEventListener('click', () => {
        const next = prompt('Task notes', task.notes || '');
        if (next !== null) run(() => request('PUT', `/api/tasks/${task.id}/notes`, { notes: next }));
      });

      const remove = document.createElement('button');
      remove.className = 'ghost';
      remove.textContent = 'Delete';
      remove.addEventListener('click', () => run(() => request('DELETE', `/api/tasks/${task.id}`)));

      li.append(check, text, rename, notes, remove);
      return li;
    };

    const renderToday = (today) => {
      document.getElementById('date').textContent = today.date;
      document.getElementById('done').textContent = today.completed;
      document.getElementById('total').textContent = today.total;
      const pct = today.total ? (today.completed / today.total) * 100 : 0;
      document.getElementById('bar').style.width = `${pct}%`;
      tasksEl.replaceChildren(...today.tasks.map(taskItem));
    };

    const showDay = async (dateKey) => {
      const day = await request('GET', `/api/days/${dateKey}`);
      const done = day.completed.map((t) => t.text).join(', ') || 'none';
      const pending = day.pending.map((t) => t.text).join(', ') || 'none';
      detailEl.textContent = `${day.date}: ${day.completed.length} completed (${done}); ${day.pending.length} pending (${pending})`;
    };

    const renderGrid = (grid) => {
      const root = document.getElementById('heatmap');
      root.replaceChildren(...grid.weeks.map((week) => {
        const col = document.createElement('div');
        col.className = 'week';
        week.forEach((cell) => {
          const box = document.createElement('div');
          box.className = `cell b${cell.bucket}`;
          if (!cell.isFuture) {
            box.title = `${cell.dateKey}: ${cell.count} completed`;
            box.addEventListener('click', () => showDay(cell.dateKey).catch((err) => setStatus(err.message, 'error')));
          }
          col.appendChild(box);
        });
        return col;
      }));
    };

    const renderStats = (stats) => {
      document.getElementById('m-today').textContent = `${stats.today.completed}/${stats.today.total}`;
      document.getElementById('m-rate').textContent = `${stats.overall.completion_rate}%`;
      document.getElementById('m-done').textContent = stats.overall.completed;
    };

    const refresh = async () => {
      const [today, grid, stats] = await Promise.all([
        request('GET', '/api/today'),
        request('GET', '/api/activity'),
        request('GET', '/api/stats')
      ]);
      renderToday(today);
      renderGrid(grid);
      renderStats(stats);
    };

    const run = (action) => {
      action()
        .then(refresh)
        .then(() => setStatus('', ''))
        .catch((err) => setStatus(err.message, 'error'));
    };

    document.getElementById('add-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const input = document.getElementById('new-task');
      const text = input.value;
      run(async () => {
        await request('POST', '/api/tasks', { text });
        input.value = '';
      });
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
