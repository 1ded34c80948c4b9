use crate::models::ServiceMetrics;

/// Renders the landing page with the current service-interest values baked
/// into the initial bar heights. The page script re-fetches them right away;
/// the baked values just avoid a flash of empty chart.
pub fn render_index(metrics: &ServiceMetrics) -> String {
    INDEX_HTML
        .replace("{{ITSE}}", &metrics.itse.to_string())
        .replace("{{POZO}}", &metrics.pozo.to_string())
        .replace("{{MANT}}", &metrics.mant.to_string())
        .replace("{{INC}}", &metrics.inc.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="es">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Tesla Ingeniería — ITSE, Pozos a Tierra y Mantenimiento</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #0f1b2d;
      --bg-2: #16263f;
      --ink: #e8eef7;
      --muted: #94a3b8;
      --accent: #ffb020;
      --accent-2: #38bdf8;
      --card: #1b2c47;
      --line: rgba(148, 163, 184, 0.18);
      --shadow: 0 24px 60px rgba(4, 10, 20, 0.45);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top right, var(--bg-2), transparent 55%),
        linear-gradient(160deg, var(--bg-1), #0a1322 70%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .site {
      width: min(960px, 100%);
      display: grid;
      gap: 28px;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: baseline;
      justify-content: space-between;
      gap: 12px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.9rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 4px 0 0;
      color: var(--muted);
      font-size: 1rem;
    }

    .badge {
      font-size: 0.85rem;
      padding: 6px 14px;
      border-radius: 999px;
      border: 1px solid var(--line);
      color: var(--muted);
    }

    .badge[data-state="connected"] {
      color: #4ade80;
      border-color: rgba(74, 222, 128, 0.4);
    }

    .badge[data-state="disconnected"] {
      color: #f87171;
      border-color: rgba(248, 113, 113, 0.4);
    }

    section.card {
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 22px;
      box-shadow: var(--shadow);
      padding: 28px;
      display: grid;
      gap: 18px;
    }

    h2 {
      margin: 0;
      font-size: 1.3rem;
    }

    .hint {
      margin: 0;
      color: var(--muted);
      font-size: 0.9rem;
    }

    .chart {
      display: grid;
      grid-template-columns: repeat(4, 1fr);
      align-items: end;
      gap: 18px;
      height: 220px;
      padding-top: 8px;
    }

    .bar-col {
      display: grid;
      grid-template-rows: 1fr auto auto;
      align-items: end;
      justify-items: center;
      gap: 8px;
      height: 100%;
    }

    .bar {
      width: 100%;
      max-width: 88px;
      border-radius: 12px 12px 4px 4px;
      background: linear-gradient(180deg, var(--accent-2), #0e7490);
      transition: height 400ms ease;
    }

    .bar-value {
      font-weight: 600;
      color: var(--accent-2);
    }

    .bar-label {
      font-size: 0.85rem;
      color: var(--muted);
      text-align: center;
    }

    form.contact {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
      gap: 14px;
    }

    form.contact .wide {
      grid-column: 1 / -1;
    }

    label {
      display: grid;
      gap: 6px;
      font-size: 0.85rem;
      color: var(--muted);
    }

    input, textarea {
      background: #12203a;
      border: 1px solid var(--line);
      border-radius: 12px;
      padding: 12px 14px;
      color: var(--ink);
      font: inherit;
    }

    textarea {
      min-height: 90px;
      resize: vertical;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 22px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: #1c1917;
      transition: transform 150ms ease, opacity 150ms ease;
    }

    button:disabled {
      opacity: 0.55;
      cursor: wait;
    }

    button:active {
      transform: scale(0.98);
    }

    .chat-box {
      display: grid;
      gap: 12px;
    }

    .transcript {
      height: 260px;
      overflow-y: auto;
      display: flex;
      flex-direction: column;
      gap: 10px;
      padding: 14px;
      background: #12203a;
      border: 1px solid var(--line);
      border-radius: 16px;
    }

    .msg {
      max-width: 80%;
      padding: 10px 14px;
      border-radius: 14px;
      display: grid;
      gap: 4px;
      font-size: 0.95rem;
    }

    .msg.user {
      align-self: flex-end;
      background: rgba(56, 189, 248, 0.18);
      border: 1px solid rgba(56, 189, 248, 0.3);
    }

    .msg.bot {
      align-self: flex-start;
      background: rgba(148, 163, 184, 0.12);
      border: 1px solid var(--line);
    }

    .msg-time {
      font-size: 0.72rem;
      color: var(--muted);
      justify-self: end;
    }

    .typing {
      align-self: flex-start;
      color: var(--muted);
      font-size: 0.85rem;
      padding: 4px 14px;
    }

    .typing[hidden] {
      display: none;
    }

    .chat-form {
      display: flex;
      gap: 10px;
    }

    .chat-form input {
      flex: 1;
    }

    .toast {
      position: fixed;
      bottom: 24px;
      left: 50%;
      transform: translateX(-50%);
      padding: 12px 22px;
      border-radius: 999px;
      background: var(--card);
      border: 1px solid var(--line);
      box-shadow: var(--shadow);
      font-size: 0.95rem;
      transition: opacity 200ms ease;
    }

    .toast[hidden] {
      display: none;
    }

    .toast[data-type="success"] {
      color: #4ade80;
    }

    .toast[data-type="error"] {
      color: #f87171;
    }

    @media (max-width: 600px) {
      section.card {
        padding: 22px 18px;
      }
      .chart {
        gap: 10px;
      }
    }
  </style>
</head>
<body>
  <main class="site">
    <header>
      <div>
        <h1>Tesla Ingeniería</h1>
        <p class="subtitle">Certificados ITSE, pozos a tierra, mantenimiento eléctrico y sistemas contra incendios.</p>
      </div>
      <span class="badge" id="connection">Verificando...</span>
    </header>

    <section class="card">
      <h2>Demanda por servicio</h2>
      <p class="hint">Interés relativo de nuestros clientes durante el último periodo.</p>
      <div class="chart" id="chart">
        <div class="bar-col">
          <div class="bar" style="height: {{ITSE}}%"></div>
          <span class="bar-value">{{ITSE}}%</span>
          <span class="bar-label">Certificado ITSE</span>
        </div>
        <div class="bar-col">
          <div class="bar" style="height: {{POZO}}%"></div>
          <span class="bar-value">{{POZO}}%</span>
          <span class="bar-label">Pozo a tierra</span>
        </div>
        <div class="bar-col">
          <div class="bar" style="height: {{MANT}}%"></div>
          <span class="bar-value">{{MANT}}%</span>
          <span class="bar-label">Mantenimiento</span>
        </div>
        <div class="bar-col">
          <div class="bar" style="height: {{INC}}%"></div>
          <span class="bar-value">{{INC}}%</span>
          <span class="bar-label">Contra incendios</span>
        </div>
      </div>
    </section>

    <section class="card">
      <h2>Solicita una cotización</h2>
      <form class="contact" id="contact-form" novalidate>
        <label>Nombre
          <input type="text" name="name" placeholder="Nombre y apellido" />
        </label>
        <label>Email
          <input type="email" name="email" placeholder="correo@empresa.com" />
        </label>
        <label>Teléfono
          <input type="tel" name="phone" placeholder="999 888 777" />
        </label>
        <label class="wide">Mensaje (opcional)
          <textarea name="message" placeholder="Cuéntanos qué necesitas"></textarea>
        </label>
        <div class="wide">
          <button type="submit" id="contact-submit">Enviar solicitud</button>
        </div>
      </form>
    </section>

    <section class="card chat-box">
      <h2>Chatea con nosotros</h2>
      <div class="transcript" id="transcript">
        <div class="typing" id="typing" hidden>Escribiendo...</div>
      </div>
      <form class="chat-form" id="chat-form">
        <input type="text" id="chat-input" placeholder="Pregunta por ITSE, pozos a tierra..." autocomplete="off" />
        <button type="submit">Enviar</button>
      </form>
    </section>
  </main>

  <div class="toast" id="toast" hidden></div>

  <script>
    class RequestError extends Error {}
    class ValidationError extends Error {}

    const createConfig = (hostname) => Object.freeze({
      baseUrl: hostname === 'localhost' || hostname === '127.0.0.1'
        ? 'http://127.0.0.1:8000'
        : '',
      endpoints: Object.freeze({
        health: '/healthz',
        metrics: '/api/metrics',
        chat: '/api/chat',
        leads: '/api/leads'
      })
    });

    const EMAIL_RE = /^[^\s@]+@[^\s@]+\.[^\s@]+$/;

    const escapeHtml = (text) => String(text).replace(/[&<>"']/g, (ch) => ({
      '&': '&amp;',
      '<': '&lt;',
      '>': '&gt;',
      '"': '&quot;',
      "'": '&#39;'
    }[ch]));

    class ApiClient {
      constructor(config) {
        this.config = config;
      }

      async request(endpoint, options = {}) {
        const url = `${this.config.baseUrl}${endpoint}`;
        let response;
        try {
          response = await fetch(url, {
            headers: { 'Content-Type': 'application/json' },
            ...options
          });
        } catch (err) {
          throw new RequestError(err.message || 'Error de red');
        }

        if (!response.ok) {
          const body = await response.json().catch(() => ({}));
          throw new RequestError(body.detail || 'Error en la solicitud');
        }
        if (response.status === 204) {
          return null;
        }
        return response.json();
      }

      checkHealth() {
        return this.request(this.config.endpoints.health);
      }

      getMetrics() {
        return this.request(this.config.endpoints.metrics);
      }

      sendChatMessage(text, useAi = true) {
        return this.request(this.config.endpoints.chat, {
          method: 'POST',
          body: JSON.stringify({ message: text, use_ai: useAi })
        });
      }

      sendLead(lead) {
        return this.request(this.config.endpoints.leads, {
          method: 'POST',
          body: JSON.stringify(lead)
        });
      }
    }

    class App {
      constructor(api) {
        this.api = api;
        this.chartKeys = ['itse', 'pozo', 'mant', 'inc'];
        this.fallbackMetrics = { itse: 80, pozo: 65, mant: 90, inc: 50 };
        this.chatPending = false;
        this.connectionEl = document.getElementById('connection');
        this.toastEl = document.getElementById('toast');
        this.transcriptEl = document.getElementById('transcript');
        this.typingEl = document.getElementById('typing');
      }

      async init() {
        try {
          await this.api.checkHealth();
          this.setConnection(true);
        } catch (err) {
          this.setConnection(false);
          this.notify('No hay conexión con el servidor', 'error');
        }

        try {
          this.renderMetrics(await this.api.getMetrics());
        } catch (err) {
          // Non-critical: keep the page useful with the baseline values.
          console.warn('metrics unavailable, using fallback', err);
          this.renderMetrics(this.fallbackMetrics);
        }

        this.bindEvents();
      }

      bindEvents() {
        document.getElementById('contact-form')
          .addEventListener('submit', (event) => this.handleLeadSubmit(event));
        document.getElementById('chat-form')
          .addEventListener('submit', (event) => this.handleChatSubmit(event));
      }

      clamp(value) {
        const v = typeof value === 'number' && !Number.isNaN(value) ? value : 50;
        return Math.min(100, Math.max(5, v));
      }

      renderMetrics(metrics) {
        const bars = document.querySelectorAll('#chart .bar');
        const values = document.querySelectorAll('#chart .bar-value');
        this.chartKeys.forEach((key, index) => {
          const height = this.clamp(metrics[key]);
          bars[index].style.height = `${height}%`;
          values[index].textContent = `${height}%`;
        });
      }

      async handleLeadSubmit(event) {
        event.preventDefault();
        const form = event.target;
        const button = document.getElementById('contact-submit');
        const idleLabel = button.textContent;
        button.disabled = true;
        button.textContent = 'Enviando...';

        try {
          const fields = new FormData(form);
          const name = (fields.get('name') || '').trim();
          const email = (fields.get('email') || '').trim();
          const phone = (fields.get('phone') || '').trim();
          const message = (fields.get('message') || '').trim();

          if (!name || !email || !phone) {
            throw new ValidationError('Completa nombre, email y teléfono');
          }
          if (!EMAIL_RE.test(email)) {
            throw new ValidationError('El email no es válido');
          }

          await this.api.sendLead({
            name,
            email,
            phone,
            message: message || 'Consulta desde la web',
            source: 'formulario-web'
          });

          this.notify('¡Gracias! Te contactamos muy pronto.', 'success');
          form.reset();
        } catch (err) {
          this.notify(err.message || 'No se pudo enviar la solicitud', 'error');
        } finally {
          button.disabled = false;
          button.textContent = idleLabel;
        }
      }

      async handleChatSubmit(event) {
        event.preventDefault();
        if (this.chatPending) {
          return;
        }
        const input = document.getElementById('chat-input');
        const text = input.value.trim();
        if (!text) {
          return;
        }

        this.appendMessage(text, 'user');
        input.value = '';
        this.chatPending = true;
        this.showTyping();

        try {
          const data = await this.api.sendChatMessage(text);
          this.hideTyping();
          this.appendMessage(data.reply, 'bot');
        } catch (err) {
          console.error('chat request failed', err);
          this.hideTyping();
          this.appendMessage(
            'Lo siento, tuve un problema para responder. Déjanos tus datos en el formulario y te contactamos.',
            'bot'
          );
        } finally {
          this.chatPending = false;
        }
      }

      appendMessage(text, sender) {
        const stamp = new Date().toLocaleTimeString([], { hour: '2-digit', minute: '2-digit' });
        const entry = document.createElement('div');
        entry.className = `msg ${sender}`;
        entry.innerHTML = `<span class="msg-text">${escapeHtml(text)}</span>` +
          `<span class="msg-time">${stamp}</span>`;
        this.transcriptEl.insertBefore(entry, this.typingEl);
        this.transcriptEl.scrollTop = this.transcriptEl.scrollHeight;
      }

      showTyping() {
        this.typingEl.hidden = false;
        this.transcriptEl.scrollTop = this.transcriptEl.scrollHeight;
      }

      hideTyping() {
        this.typingEl.hidden = true;
      }

      setConnection(connected) {
        this.connectionEl.textContent = connected ? 'En línea' : 'Sin conexión';
        this.connectionEl.dataset.state = connected ? 'connected' : 'disconnected';
      }

      notify(message, type) {
        this.toastEl.textContent = message;
        this.toastEl.dataset.type = type || '';
        this.toastEl.hidden = false;
        clearTimeout(this.toastTimer);
        this.toastTimer = setTimeout(() => {
          this.toastEl.hidden = true;
        }, 3500);
      }
    }

    const config = createConfig(window.location.hostname);
    const app = new App(new ApiClient(config));
    app.init();
  </script>
</body>
</html>
"#;
