//! Global CSS styles for the gallery.
//!
//! Covers the page chrome, the preview modal and the default `t-` class
//! scheme of the upload grid.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* VOID (Backgrounds) */
  --void-black: #0a0a0a;
  --void-lighter: #111111;
  --void-border: #1a1a1a;

  /* CYAN (Interactive) */
  --cyan: #00d4aa;
  --cyan-glow: rgba(0, 212, 170, 0.3);

  /* GOLD (Titles) */
  --gold: #d4af37;
  --gold-glow: rgba(212, 175, 55, 0.3);

  /* TEXT */
  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.7);
  --text-muted: rgba(245, 245, 245, 0.5);

  /* SEMANTIC */
  --danger: #ff3366;

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-xl: 1.5rem;
  --text-3xl: 3rem;

  /* Grid tiles */
  --tile-size: 112px;

  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-mono);
  background: var(--void-black);
  color: var(--text-primary);
  line-height: 1.7;
  min-height: 100vh;
}

/* === Gallery Page === */
.gallery {
  padding: 2rem;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.gallery__header {
  display: flex;
  align-items: baseline;
  gap: 1.5rem;
}

.page-title {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  font-weight: 400;
  color: var(--gold);
  text-shadow: 0 0 30px var(--gold-glow);
  letter-spacing: 0.1em;
}

.gallery__count,
.gallery__toggle {
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.gallery__toggle input {
  accent-color: var(--cyan);
}

.gallery__error {
  color: var(--danger);
  font-size: var(--text-sm);
}

/* === Upload Grid === */
.t-upload__card {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
  list-style: none;
}

.t-upload__card-item {
  position: relative;
  width: var(--tile-size);
  height: var(--tile-size);
  border-radius: 6px;
  overflow: hidden;
}

.t-is--background {
  background: var(--void-lighter);
  border: 1px dashed var(--void-border);
}

.t-upload__card-box {
  width: 100%;
  height: 100%;
}

.t-upload__card-content {
  position: relative;
}

.t-upload__card-image {
  width: 100%;
  height: 100%;
  object-fit: cover;
  display: block;
}

.t-upload__card-mask {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  background: rgba(10, 10, 10, 0.6);
  opacity: 0;
  transition: opacity var(--transition-fast);
  cursor: pointer;
}

.t-upload__card-item:hover .t-upload__card-mask {
  opacity: 1;
}

.t-upload__card-mask-item {
  color: var(--text-primary);
  cursor: pointer;
  font-size: var(--text-base);
}

.t-upload__card-mask-item:hover {
  color: var(--cyan);
}

.t-upload__card-mask-item-divider {
  width: 1px;
  height: 1rem;
  background: var(--text-muted);
}

.t-upload__card-container {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 0.25rem;
  cursor: pointer;
  color: var(--text-secondary);
  text-align: center;
  transition: color var(--transition-fast);
}

.t-upload__card-container:hover {
  color: var(--cyan);
}

.t-size-s {
  font-size: var(--text-xs);
}

.t-is-disabled {
  opacity: 0.5;
}

.t-is-disabled .t-upload__card-container {
  cursor: not-allowed;
}

.grid-icon {
  font-size: var(--text-xl);
  line-height: 1;
}

/* === Loading === */
.t-loading {
  display: flex;
  flex-direction: column;
  align-items: center;
}

.t-loading__spinner {
  width: 24px;
  height: 24px;
  border: 3px solid rgba(0, 212, 170, 0.2);
  border-top-color: var(--cyan);
  border-radius: 50%;
  animation: spin 1s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Modal Overlay === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(10, 10, 10, 0.85);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 1000;
  padding: 2rem;
}

.modal-content {
  background: var(--void-lighter);
  border: 1px solid var(--void-border);
  border-radius: 8px;
  max-width: 640px;
  width: 100%;
  max-height: 90vh;
  overflow-y: auto;
}

.modal-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem 1.5rem;
  border-bottom: 1px solid var(--void-border);
}

.modal-title {
  font-family: var(--font-serif);
  font-weight: 400;
  color: var(--gold);
}

.modal-close-btn {
  background: transparent;
  border: none;
  color: var(--text-muted);
  font-size: var(--text-xl);
  cursor: pointer;
  padding: 0.25rem 0.5rem;
  transition: color 0.2s ease;
}

.modal-close-btn:hover {
  color: var(--text-primary);
}

.modal-body {
  padding: 1.5rem;
}

.preview-modal__image {
  width: 100%;
  border-radius: 4px;
}

.preview-modal__details {
  margin-top: 0.75rem;
  font-size: var(--text-xs);
  color: var(--text-muted);
}
"#;
