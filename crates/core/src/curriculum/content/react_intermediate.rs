use crate::curriculum::lesson::LessonSource;

pub(crate) const LESSONS: &[LessonSource] = &[
    LessonSource {
        slug: "effects",
        title: "Effects",
        summary: "Synchronising with the world outside React.",
        body: r##"`useEffect` runs code after render, for example to subscribe or fetch.

```jsx
useEffect(() => {
  const id = setInterval(() => setNow(Date.now()), 1000);
  return () => clearInterval(id); // cleanup
}, []);
```

The dependency array controls when the effect re-runs.

**Exercise:** update `document.title` whenever a counter changes.
"##,
    },
    LessonSource {
        slug: "context",
        title: "Context",
        summary: "Sharing values without prop drilling.",
        body: r##"Context passes a value down the tree without threading props.

```jsx
const ThemeContext = createContext("light");

function App() {
  return (
    <ThemeContext.Provider value="dark">
      <Toolbar />
    </ThemeContext.Provider>
  );
}

function Toolbar() {
  const theme = useContext(ThemeContext);
  return <div className={theme}>...</div>;
}
```

**Exercise:** hold the sidebar's open sections in a context scoped to the
sidebar.
"##,
    },
    LessonSource {
        slug: "custom-hooks",
        title: "Custom Hooks",
        summary: "Extracting reusable stateful logic.",
        body: r##"A custom hook is a function that calls other hooks.

```jsx
function useToggle(initial = false) {
  const [on, setOn] = useState(initial);
  const toggle = useCallback(() => setOn((v) => !v), []);
  return [on, toggle];
}
```

**Exercise:** write `useLocalStorage(key, initial)` that mirrors a value into
`localStorage`.
"##,
    },
    LessonSource {
        slug: "routing",
        title: "Routing",
        summary: "Mapping URLs to components.",
        body: r##"A router picks which component to render for the current URL.

```jsx
<Routes>
  <Route path="/" element={<Home />} />
  <Route path="/css/:lesson" element={<CssLesson />} />
  <Route path="*" element={<NotFound />} />
</Routes>
```

Read the current location with `useLocation()` to highlight the active
section of a sidebar.

**Exercise:** add a "not found" page for unknown URLs.
"##,
    },
    LessonSource {
        slug: "performance",
        title: "Performance",
        summary: "Memoisation and avoiding wasted renders.",
        body: r##"Only optimise after measuring with the React profiler.

```jsx
const sorted = useMemo(() => sortLessons(lessons), [lessons]);
const onSelect = useCallback((id) => setSelected(id), []);
const Row = memo(function Row({ lesson }) {
  return <li>{lesson.title}</li>;
});
```

**Exercise:** profile a long list and fix one unnecessary re-render.
"##,
    },
];
