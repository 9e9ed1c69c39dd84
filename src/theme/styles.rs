//! Global CSS styles for iPlantGuard.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* LEAF (Success, Confirmation) */
  --leaf: #2ecc71;
  --forest: #27ae60;

  /* ALERT */
  --alert: #e74c3c;

  /* SURFACES */
  --bg: #f4f8f4;
  --surface: #ffffff;
  --border: #d8e4d8;

  /* TEXT */
  --text-primary: #1f2d1f;
  --text-secondary: #55675a;

  --radius: 12px;
  --shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
  --transition-normal: 300ms ease;
}

body.dark-theme {
  --bg: #121813;
  --surface: #1c241d;
  --border: #2d3a2f;
  --text-primary: #e8f2e8;
  --text-secondary: #a3b5a6;
  --shadow: 0 4px 12px rgba(0, 0, 0, 0.4);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: 'Segoe UI', Roboto, Helvetica, Arial, sans-serif;
  background: var(--bg);
  color: var(--text-primary);
  transition: background var(--transition-normal), color var(--transition-normal);
}

/* === Navigation === */
.nav-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 16px 32px;
  background: var(--surface);
  border-bottom: 1px solid var(--border);
}

.nav-title {
  font-size: 1.4rem;
  font-weight: 700;
  color: var(--forest);
}

.nav-links {
  display: flex;
  gap: 20px;
  align-items: center;
}

.nav-links a {
  color: var(--text-secondary);
  text-decoration: none;
}

.nav-links a:hover {
  color: var(--forest);
}

.theme-toggle {
  background: none;
  border: 1px solid var(--border);
  border-radius: 50%;
  width: 38px;
  height: 38px;
  font-size: 1.1rem;
  cursor: pointer;
}

/* === Page === */
.page {
  max-width: 1100px;
  margin: 0 auto;
  padding: 32px 24px;
}

.page-title {
  margin-bottom: 24px;
}

.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
  gap: 24px;
}

/* === Cards === */
.tarjeta {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  box-shadow: var(--shadow);
  padding: 24px;
  display: flex;
  flex-direction: column;
  gap: 16px;
}

.tarjeta h2 {
  font-size: 1.15rem;
}

.tarjeta p {
  color: var(--text-secondary);
  font-size: 0.95rem;
}

/* === Forms === */
.file-label {
  display: block;
  padding: 14px;
  border: 2px dashed var(--border);
  border-radius: 8px;
  text-align: center;
  cursor: pointer;
}

.file-label input[type="file"] {
  display: none;
}

.text-input {
  width: 100%;
  padding: 10px 12px;
  border: 1px solid var(--border);
  border-radius: 8px;
  background: var(--bg);
  color: var(--text-primary);
}

/* === Buttons === */
.btn-primary, .btn-secondary, .btn-camera {
  border-radius: 8px;
  padding: 10px 18px;
  font-size: 0.95rem;
  cursor: pointer;
  transition: transform var(--transition-normal), background var(--transition-normal);
}

.btn-primary {
  background: var(--leaf);
  color: white;
  border: none;
}

.btn-primary:hover {
  background: var(--forest);
}

.btn-secondary {
  background: transparent;
  color: var(--text-primary);
  border: 1px solid var(--border);
}

.btn-camera {
  background: var(--forest);
  color: white;
  border: none;
  font-size: 1.05rem;
  padding: 14px 20px;
}

.btn-primary:disabled, .btn-camera:disabled {
  opacity: 0.6;
  cursor: default;
}

.icon-btn {
  background: none;
  border: none;
  font-size: 1.6rem;
  cursor: pointer;
  color: var(--text-secondary);
}

/* === Webcam Modal === */
.modal-camara {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.7);
  align-items: center;
  justify-content: center;
  z-index: 1000;
}

.modal-camara-content {
  background: var(--surface);
  border-radius: var(--radius);
  padding: 20px;
  display: flex;
  flex-direction: column;
  gap: 12px;
  max-width: 90vw;
}

.modal-camara-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.modal-camara video {
  width: 100%;
  max-height: 70vh;
  border-radius: 8px;
  background: black;
}

.modal-actions {
  display: flex;
  gap: 12px;
  justify-content: flex-end;
}

#canvas-webcam, #form-webcam {
  display: none;
}

/* === FAQ === */
.faq-list {
  display: flex;
  flex-direction: column;
  gap: 12px;
}

.faq-item {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  overflow: hidden;
}

.faq-question {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 16px 20px;
  cursor: pointer;
  font-weight: 600;
}

.faq-answer {
  padding: 0 20px 16px;
  color: var(--text-secondary);
}

/* === Toasts === */
@keyframes slideIn {
  from { transform: translateX(120%); opacity: 0; }
  to { transform: translateX(0); opacity: 1; }
}

@keyframes slideOut {
  from { transform: translateX(0); opacity: 1; }
  to { transform: translateX(120%); opacity: 0; }
}
"#;
