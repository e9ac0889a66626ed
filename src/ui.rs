use crate::models::{Entry, EntryKind};
use crate::summary::build_summary;
use crate::tracker::Tracker;

pub fn render_index(tracker: &Tracker) -> String {
    let summary = build_summary(tracker);
    let danger_class = if summary.over_limit { " danger" } else { "" };

    INDEX_HTML
        .replace("{{TOTAL}}", &summary.total_calories.to_string())
        .replace("{{LIMIT}}", &summary.calorie_limit.to_string())
        .replace("{{CONSUMED}}", &summary.consumed.to_string())
        .replace("{{BURNED}}", &summary.burned.to_string())
        .replace("{{REMAINING}}", &summary.remaining.to_string())
        .replace("{{BAR_WIDTH}}", &summary.bar_width_pct.to_string())
        .replace("{{DANGER}}", danger_class)
        .replace("{{MEAL_ITEMS}}", &render_entries(&tracker.meals, EntryKind::Meal))
        .replace(
            "{{WORKOUT_ITEMS}}",
            &render_entries(&tracker.workouts, EntryKind::Workout),
        )
}

fn render_entries(entries: &[Entry], kind: EntryKind) -> String {
    entries
        .iter()
        .map(|entry| render_entry_card(entry, kind))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_entry_card(entry: &Entry, kind: EntryKind) -> String {
    format!(
        r#"<div class="card" data-id="{id}">
  <h4 class="entry-name">{name}</h4>
  <span class="entry-calories {kind}">{calories}</span>
  <span class="entry-time">{time}</span>
  <button class="delete" type="button" aria-label="Delete entry">&#10005;</button>
</div>"#,
        id = escape_html(&entry.id),
        name = escape_html(&entry.name),
        kind = kind.as_str(),
        calories = entry.calories,
        time = entry.logged_at.format("%H:%M"),
    )
}

// Entry names are user input and land inside markup.
fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Tracalorie</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&display=swap');

    :root {
      --bg-1: #eef6ee;
      --bg-2: #cfe8d4;
      --ink: #22302a;
      --accent: #2d7a4b;
      --accent-2: #3a5a78;
      --danger: #c63b2b;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 20px 48px rgba(45, 122, 75, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 55%),
        linear-gradient(150deg, var(--bg-1), #f3faf1 65%, #eaf4ef 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(900px, 100%);
      background: var(--card);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    h1 {
      margin: 0;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
    }

    .subtitle {
      margin: 0;
      color: #5c6a60;
      font-size: 0.95rem;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
      gap: 14px;
    }

    .stat {
      background: white;
      border-radius: 16px;
      padding: 16px;
      border: 1px solid rgba(45, 122, 75, 0.1);
      display: grid;
      gap: 6px;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #7d8a80;
    }

    .stat .value {
      font-size: 1.6rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .stat.danger {
      background: var(--danger);
      border-color: var(--danger);
    }

    .stat.danger .label,
    .stat.danger .value {
      color: white;
    }

    .progress {
      height: 18px;
      background: rgba(45, 122, 75, 0.12);
      border-radius: 999px;
      overflow: hidden;
    }

    .progress-bar {
      height: 100%;
      width: 0;
      background: var(--accent);
      border-radius: 999px;
      transition: width 200ms ease;
    }

    .progress-bar.danger {
      background: var(--danger);
    }

    .columns {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
      gap: 20px;
    }

    .column h2 {
      margin: 0 0 10px;
      font-size: 1.2rem;
    }

    form.entry-form {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
      margin-bottom: 10px;
    }

    input[type="text"],
    input[type="number"] {
      flex: 1 1 120px;
      border: 1px solid rgba(58, 90, 120, 0.25);
      border-radius: 10px;
      padding: 10px 12px;
      font: inherit;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 10px;
      padding: 10px 16px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      color: white;
      background: var(--accent-2);
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-meal {
      background: var(--accent);
    }

    .btn-workout {
      background: var(--accent-2);
    }

    .btn-reset {
      background: var(--danger);
    }

    .filter {
      width: 100%;
      margin-bottom: 10px;
    }

    .items {
      display: grid;
      gap: 8px;
    }

    .card {
      background: white;
      border: 1px solid rgba(45, 122, 75, 0.12);
      border-radius: 14px;
      padding: 12px 14px;
      display: flex;
      align-items: center;
      gap: 12px;
    }

    .card .entry-name {
      margin: 0;
      font-size: 1rem;
      flex: 1;
    }

    .entry-calories {
      font-weight: 600;
      color: white;
      border-radius: 8px;
      padding: 4px 12px;
    }

    .entry-calories.meal {
      background: var(--accent);
    }

    .entry-calories.workout {
      background: var(--accent-2);
    }

    .entry-time {
      color: #8a948c;
      font-size: 0.8rem;
    }

    .delete {
      background: transparent;
      color: var(--danger);
      font-size: 1rem;
      padding: 4px 8px;
    }

    .toolbar {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      gap: 10px;
    }

    .toolbar form {
      display: flex;
      gap: 8px;
    }

    .status {
      font-size: 0.9rem;
      color: #5c6a60;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: var(--danger);
    }

    .status[data-type="ok"] {
      color: var(--accent);
    }

    @media (max-width: 600px) {
      .app {
        padding: 24px 18px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Tracalorie</h1>
      <p class="subtitle">Log meals and workouts against a daily calorie limit.</p>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Daily limit</span>
        <span id="calories-limit" class="value">{{LIMIT}}</span>
      </div>
      <div class="stat">
        <span class="label">Gain / Loss</span>
        <span id="calories-total" class="value">{{TOTAL}}</span>
      </div>
      <div class="stat">
        <span class="label">Consumed</span>
        <span id="calories-consumed" class="value">{{CONSUMED}}</span>
      </div>
      <div class="stat">
        <span class="label">Burned</span>
        <span id="calories-burned" class="value">{{BURNED}}</span>
      </div>
      <div class="stat{{DANGER}}" id="remaining-card">
        <span class="label">Remaining</span>
        <span id="calories-remaining" class="value">{{REMAINING}}</span>
      </div>
    </section>

    <div class="progress">
      <div id="calorie-progress" class="progress-bar{{DANGER}}" style="width: {{BAR_WIDTH}}%"></div>
    </div>

    <section class="toolbar">
      <form id="limit-form">
        <input id="limit" type="number" min="1" placeholder="New daily limit" />
        <button type="submit">Set limit</button>
      </form>
      <button id="reset" class="btn-reset" type="button">Reset day</button>
      <div class="status" id="status"></div>
    </section>

    <section class="columns">
      <div class="column">
        <h2>Meals</h2>
        <form id="meal-form" class="entry-form" method="post" action="/meal/add">
          <input id="meal-name" name="name" type="text" placeholder="Meal name" />
          <input id="meal-calories" name="calories" type="number" min="0" placeholder="Calories" />
          <button class="btn-meal" type="submit">Add meal</button>
        </form>
        <input id="filter-meals" class="filter" type="text" placeholder="Filter meals..." />
        <div id="meal-items" class="items">
{{MEAL_ITEMS}}
        </div>
      </div>

      <div class="column">
        <h2>Workouts</h2>
        <form id="workout-form" class="entry-form" method="post" action="/workout/add">
          <input id="workout-name" name="name" type="text" placeholder="Workout name" />
          <input id="workout-calories" name="calories" type="number" min="0" placeholder="Calories" />
          <button class="btn-workout" type="submit">Add workout</button>
        </form>
        <input id="filter-workouts" class="filter" type="text" placeholder="Filter workouts..." />
        <div id="workout-items" class="items">
{{WORKOUT_ITEMS}}
        </div>
      </div>
    </section>
  </main>

  <script>
    const totalEl = document.getElementById('calories-total');
    const limitEl = document.getElementById('calories-limit');
    const consumedEl = document.getElementById('calories-consumed');
    const burnedEl = document.getElementById('calories-burned');
    const remainingEl = document.getElementById('calories-remaining');
    const remainingCard = document.getElementById('remaining-card');
    const progressEl = document.getElementById('calorie-progress');
    const statusEl = document.getElementById('status');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const flashStatus = (message) => {
      setStatus(message, 'ok');
      setTimeout(() => setStatus('', ''), 1200);
    };

    const applySummary = (summary) => {
      totalEl.textContent = summary.total_calories;
      limitEl.textContent = summary.calorie_limit;
      consumedEl.textContent = summary.consumed;
      burnedEl.textContent = summary.burned;
      remainingEl.textContent = summary.remaining;
      progressEl.style.width = `${summary.bar_width_pct}%`;
      remainingCard.classList.toggle('danger', summary.over_limit);
      progressEl.classList.toggle('danger', summary.over_limit);
    };

    const entryCard = (entry, kind) => {
      const card = document.createElement('div');
      card.className = 'card';
      card.dataset.id = entry.id;

      const name = document.createElement('h4');
      name.className = 'entry-name';
      name.textContent = entry.name;

      const calories = document.createElement('span');
      calories.className = `entry-calories ${kind}`;
      calories.textContent = entry.calories;

      const time = document.createElement('span');
      time.className = 'entry-time';
      time.textContent = entry.logged_at.slice(11, 16);

      const del = document.createElement('button');
      del.className = 'delete';
      del.type = 'button';
      del.setAttribute('aria-label', 'Delete entry');
      del.textContent = '✕';

      card.append(name, calories, time, del);
      return card;
    };

    const postJson = async (url, body) => {
      const res = await fetch(url, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      });
      if (!res.ok) {
        throw new Error(await res.text() || 'Request failed');
      }
      return res.json();
    };

    const applyFilter = (filterEl, listEl) => {
      const text = filterEl.value.toLowerCase();
      listEl.querySelectorAll('.card').forEach((card) => {
        const name = card.querySelector('.entry-name').textContent.toLowerCase();
        card.style.display = name.includes(text) ? '' : 'none';
      });
    };

    const wireSection = (kind) => {
      const form = document.getElementById(`${kind}-form`);
      const nameEl = document.getElementById(`${kind}-name`);
      const caloriesEl = document.getElementById(`${kind}-calories`);
      const listEl = document.getElementById(`${kind}-items`);
      const filterEl = document.getElementById(`filter-${kind}s`);

      form.addEventListener('submit', async (event) => {
        event.preventDefault();
        const name = nameEl.value.trim();
        const calories = Number(caloriesEl.value);
        if (name === '' || caloriesEl.value.trim() === '') {
          setStatus('Please fill in all fields', 'error');
          return;
        }
        if (!Number.isInteger(calories) || calories < 0) {
          setStatus('Calories must be a non-negative whole number', 'error');
          return;
        }

        try {
          const data = await postJson(`/api/${kind}`, { name, calories });
          listEl.appendChild(entryCard(data.entry, kind));
          applySummary(data.summary);
          applyFilter(filterEl, listEl);
          nameEl.value = '';
          caloriesEl.value = '';
          flashStatus('Saved');
        } catch (err) {
          setStatus(err.message, 'error');
        }
      });

      listEl.addEventListener('click', async (event) => {
        const button = event.target.closest('.delete');
        if (!button || !confirm('Are you sure?')) {
          return;
        }
        const card = button.closest('.card');
        try {
          const res = await fetch(`/api/${kind}/${card.dataset.id}`, { method: 'DELETE' });
          if (!res.ok) {
            throw new Error(await res.text() || 'Request failed');
          }
          const data = await res.json();
          card.remove();
          applySummary(data.summary);
        } catch (err) {
          setStatus(err.message, 'error');
        }
      });

      filterEl.addEventListener('keyup', () => applyFilter(filterEl, listEl));

      return { listEl, filterEl };
    };

    const meals = wireSection('meal');
    const workouts = wireSection('workout');

    document.getElementById('limit-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      const limitInput = document.getElementById('limit');
      if (limitInput.value.trim() === '') {
        setStatus('Please add a calorie limit', 'error');
        return;
      }
      try {
        applySummary(await postJson('/api/limit', { limit: Number(limitInput.value) }));
        limitInput.value = '';
        flashStatus('Limit updated');
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    document.getElementById('reset').addEventListener('click', async () => {
      if (!confirm('Reset the day? This removes every meal and workout.')) {
        return;
      }
      try {
        const res = await fetch('/api/reset', { method: 'POST' });
        if (!res.ok) {
          throw new Error(await res.text() || 'Request failed');
        }
        applySummary(await res.json());
        meals.listEl.innerHTML = '';
        workouts.listEl.innerHTML = '';
        meals.filterEl.value = '';
        workouts.filterEl.value = '';
        flashStatus('Day reset');
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Entry;

    #[test]
    fn index_shows_current_totals_and_items() {
        let mut tracker = Tracker::default();
        tracker.add_meal(Entry::new("Oatmeal", 320));
        tracker.add_workout(Entry::new("Morning run", 250));

        let page = render_index(&tracker);
        assert!(page.contains(">70<"));
        assert!(page.contains(">2000<"));
        assert!(page.contains("Oatmeal"));
        assert!(page.contains("Morning run"));
        assert!(page.contains(&format!("data-id=\"{}\"", tracker.meals[0].id)));
        assert!(!page.contains("{{"));
    }

    #[test]
    fn over_limit_page_carries_the_danger_class() {
        let mut tracker = Tracker::default();
        tracker.add_meal(Entry::new("Feast", 2500));

        let page = render_index(&tracker);
        assert!(page.contains("stat danger"));
        assert!(page.contains("width: 100%"));
    }

    #[test]
    fn entry_names_are_escaped() {
        let mut tracker = Tracker::default();
        tracker.add_meal(Entry::new("<script>alert(1)</script>", 1));

        let page = render_index(&tracker);
        assert!(page.contains("&lt;script&gt;"));
        assert!(!page.contains("<script>alert(1)</script>"));
    }
}
