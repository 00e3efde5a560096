use crate::curriculum::lesson::LessonSource;

pub(crate) const LESSONS: &[LessonSource] = &[
    LessonSource {
        slug: "introduction",
        title: "Why React?",
        summary: "Describing UI as a function of state.",
        body: r##"React lets you describe what the screen should look like for a given state
and updates the page for you when the state changes.

```jsx
import { createRoot } from "react-dom/client";

function App() {
  return <h1>Hello from React</h1>;
}

createRoot(document.getElementById("root")).render(<App />);
```

**Exercise:** scaffold a project with Vite and render your name.
"##,
    },
    LessonSource {
        slug: "jsx",
        title: "JSX",
        summary: "HTML-like syntax inside JavaScript.",
        body: r##"JSX is syntax sugar for function calls that create elements.

```jsx
const name = "Ada";
const element = (
  <p className="greeting">
    Hello, {name.toUpperCase()}!
  </p>
);
```

- Use `className` instead of `class`.
- Curly braces embed any JavaScript expression.
- A component returns a single root element (or a fragment `<>...</>`).

**Exercise:** render a list from an array with `map`, giving each item a
`key`.
"##,
    },
    LessonSource {
        slug: "components",
        title: "Components",
        summary: "Splitting the UI into reusable pieces.",
        body: r##"A component is a function that returns JSX. Its name starts with a capital
letter.

```jsx
function Navbar() {
  return (
    <nav>
      <a href="/">Home</a>
    </nav>
  );
}

function Page() {
  return (
    <>
      <Navbar />
      <main>Content</main>
    </>
  );
}
```

**Exercise:** split a page into `Header`, `Sidebar` and `Footer` components.
"##,
    },
    LessonSource {
        slug: "props",
        title: "Props",
        summary: "Passing data from parent to child.",
        body: r##"Props are the arguments of a component.

```jsx
function ProgressTracker({ current, total }) {
  const percent = (current / total) * 100;
  return (
    <div>
      <span>{current}/{total}</span>
      <div className="bar" style={{ width: `${percent}%` }} />
    </div>
  );
}

<ProgressTracker current={2} total={6} />;
```

Props are read-only: a child never changes the props it receives.

**Exercise:** give `ProgressTracker` an optional `label` prop with a default.
"##,
    },
    LessonSource {
        slug: "state",
        title: "State",
        summary: "Remembering values between renders with useState.",
        body: r##"State is data a component owns and can change.

```jsx
import { useState } from "react";

function Counter() {
  const [count, setCount] = useState(0);
  return (
    <button onClick={() => setCount(count + 1)}>
      Clicked {count} times
    </button>
  );
}
```

Calling the setter schedules a re-render with the new value.

**Exercise:** build a toggle that shows and hides a paragraph.
"##,
    },
    LessonSource {
        slug: "hooks",
        title: "Hooks",
        summary: "The rules that make hooks work.",
        body: r##"Hooks are functions whose names start with `use`.

1. Call hooks only at the top level of a component.
2. Call hooks only from components or other hooks.

```jsx
function Sidebar({ sections }) {
  const [open, setOpen] = useState(new Set());

  const toggle = (id) =>
    setOpen((prev) => {
      const next = new Set(prev);
      next.has(id) ? next.delete(id) : next.add(id);
      return next;
    });

  return sections.map((s) => (
    <button key={s} onClick={() => toggle(s)}>{s}</button>
  ));
}
```

**Exercise:** explain why calling `useState` inside an `if` breaks React.
"##,
    },
];
