use crate::curriculum::lesson::LessonSource;

pub(crate) const LESSONS: &[LessonSource] = &[
    LessonSource {
        slug: "variables",
        title: "Variables and Types",
        summary: "let, const and the primitive types.",
        body: r##"Declare values with `const` when they never change and `let` otherwise.

```js
const course = "Web Dev Academy";
let lessonsDone = 0;
lessonsDone += 1;

typeof course;      // "string"
typeof lessonsDone; // "number"
typeof true;        // "boolean"
```

Avoid `var`; its scoping rules are surprising.

**Exercise:** store your name and age in variables and log a sentence that
uses both with a template literal.
"##,
    },
    LessonSource {
        slug: "functions",
        title: "Functions",
        summary: "Declarations, arrow functions and return values.",
        body: r##"Functions package up a piece of work.

```js
function percentage(current, total) {
  return (current / total) * 100;
}

const label = (current, total) => `${current}/${total}`;

percentage(3, 6); // 50
label(3, 6);      // "3/6"
```

**Exercise:** write a function that returns `"even"` or `"odd"` for a number.
"##,
    },
    LessonSource {
        slug: "arrays-and-objects",
        title: "Arrays and Objects",
        summary: "Collections and records.",
        body: r##"Arrays hold ordered lists; objects hold named fields.

```js
const tracks = ["html", "css", "javascript"];
tracks.push("react");

const lesson = { title: "Functions", step: 2, total: 6 };
const { title, step } = lesson;

const upper = tracks.map((t) => t.toUpperCase());
const short = tracks.filter((t) => t.length <= 4);
```

**Exercise:** given an array of lessons, compute how many are finished using
`filter` and `length`.
"##,
    },
    LessonSource {
        slug: "dom",
        title: "The DOM",
        summary: "Reading and changing the page from JavaScript.",
        body: r##"The Document Object Model is the live tree the browser built from HTML.

```js
const heading = document.querySelector("h1");
heading.textContent = "Changed by JavaScript";

const item = document.createElement("li");
item.textContent = "New item";
document.querySelector("ul").append(item);
```

**Exercise:** add a class to every paragraph on the page with
`querySelectorAll` and `forEach`.
"##,
    },
    LessonSource {
        slug: "events",
        title: "Events",
        summary: "Responding to clicks, input and more.",
        body: r##"Listen for user actions with `addEventListener`.

```js
const button = document.querySelector("#toggle");
const panel = document.querySelector("#panel");

button.addEventListener("click", () => {
  panel.classList.toggle("open");
});
```

Clicking twice returns the panel to where it started.

**Exercise:** show a live character count under a `<textarea>` using the
`input` event.
"##,
    },
    LessonSource {
        slug: "async",
        title: "Promises and async/await",
        summary: "Working with results that arrive later.",
        body: r##"Network requests finish in the future; promises represent that result.

```js
async function loadUser(id) {
  const response = await fetch(`/api/users/${id}`);
  if (!response.ok) {
    throw new Error(`request failed: ${response.status}`);
  }
  return response.json();
}

loadUser(1)
  .then((user) => console.log(user.name))
  .catch((err) => console.error(err));
```

**Exercise:** fetch two resources in parallel with `Promise.all`.
"##,
    },
];
